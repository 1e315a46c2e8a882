use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "prefixcss")]
#[command(about = "Vendor-prefix expansion for parsed CSS trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Debug)]
pub enum Commands {
    /// Expand one stylesheet tree and emit CSS (or the expanded tree).
    Build {
        /// JSON file holding the pre-parsed stylesheet tree
        input: String,
        #[arg(short, long)]
        output: Option<String>,
        /// Replacement prefix tables (JSON); built-in policy when omitted
        #[arg(long)]
        tables: Option<String>,
        /// Emit the expanded tree as JSON instead of CSS text
        #[arg(long)]
        json: bool,
    },
}
