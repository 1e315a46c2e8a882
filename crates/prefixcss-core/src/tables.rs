use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// Vendor identifier used to build prefixed property names and value
/// functions (`-moz-box-shadow`, `-webkit-linear-gradient(...)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Moz,
    Webkit,
    Ms,
    O,
    Epub,
}

impl Vendor {
    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Moz => "moz",
            Vendor::Webkit => "webkit",
            Vendor::Ms => "ms",
            Vendor::O => "o",
            Vendor::Epub => "epub",
        }
    }
}

/// Identifier of a special-case expansion too irregular for a flat prefix
/// list. Dispatched by match in `generators::run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Generator {
    BorderRadius,
    LinearGradient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValuePrefixEntry {
    pub pattern: String,
    pub vendors: Vec<Vendor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueGeneratorEntry {
    pub pattern: String,
    pub generator: Generator,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectorPrefixEntry {
    pub pattern: String,
    pub replacements: Vec<String>,
}

/// The five lookup tables driving the expansion pass. Immutable once built;
/// a single instance can be shared across threads.
///
/// The inner value/selector tables are ordered lists rather than maps because
/// entry order is observable in the emitted declaration order.
#[derive(Debug, Clone, Deserialize)]
pub struct PrefixTables {
    #[serde(default)]
    pub property_prefixes: HashMap<String, Vec<Vendor>>,
    #[serde(default)]
    pub property_generators: HashMap<String, Generator>,
    #[serde(default)]
    pub value_prefixes: HashMap<String, Vec<ValuePrefixEntry>>,
    #[serde(default)]
    pub value_generators: HashMap<String, Vec<ValueGeneratorEntry>>,
    #[serde(default)]
    pub selector_prefixes: Vec<SelectorPrefixEntry>,
}

impl Default for PrefixTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PrefixTables {
    /// Load replacement tables from a JSON file. Sections left out of the
    /// file are simply empty (no expansion on that axis).
    pub fn load(path: &str) -> Result<Self, String> {
        let data =
            fs::read_to_string(path).map_err(|e| format!("Could not read {}: {}", path, e))?;

        serde_json::from_str(&data).map_err(|e| format!("Invalid JSON in {}: {}", path, e))
    }

    /// The historical prefix policy: every property, value and selector that
    /// required vendor prefixes at the time, with the vendors that shipped
    /// them.
    pub fn builtin() -> Self {
        use Vendor::*;

        let property_prefixes: &[(&str, &[Vendor])] = &[
            ("animation", &[Moz, Webkit]),
            ("animation-delay", &[Moz, Webkit]),
            ("animation-direction", &[Moz, Webkit]),
            ("animation-duration", &[Moz, Webkit]),
            ("animation-fill-mode", &[Moz, Webkit]),
            ("animation-iteration-count", &[Moz, Webkit]),
            ("animation-name", &[Moz, Webkit]),
            ("animation-play-state", &[Moz, Webkit]),
            ("animation-timing-function", &[Moz, Webkit]),
            ("appearance", &[Moz, Webkit]),
            ("backface-visibility", &[Moz, Webkit]),
            ("background-clip", &[Moz, Webkit]),
            ("background-origin", &[Moz, Webkit]),
            ("background-size", &[Moz, Webkit, O]),
            ("border-after", &[Webkit]),
            ("border-after-color", &[Webkit]),
            ("border-after-style", &[Webkit]),
            ("border-after-width", &[Webkit]),
            ("border-before", &[Webkit]),
            ("border-before-color", &[Webkit]),
            ("border-before-style", &[Webkit]),
            ("border-before-width", &[Webkit]),
            ("border-bottom-image", &[Moz, Webkit, O]),
            ("border-bottom-left-image", &[Moz, Webkit, O]),
            ("border-bottom-left-radius", &[Webkit]),
            ("border-bottom-right-image", &[Moz, Webkit, O]),
            ("border-bottom-right-radius", &[Webkit]),
            ("border-corner-image", &[Moz, Webkit, O]),
            ("border-image", &[Moz, Webkit, O]),
            ("border-left-image", &[Moz, Webkit, O]),
            ("border-top-image", &[Moz, Webkit, O]),
            ("border-top-left-image", &[Moz, Webkit, O]),
            ("border-top-left-radius", &[Webkit]),
            ("border-top-right-image", &[Moz, Webkit, O]),
            ("border-top-right-radius", &[Webkit]),
            ("border-radius", &[Moz, Webkit, O]),
            ("border-right-image", &[Moz, Webkit, O]),
            ("box-align", &[Moz, Webkit, Ms]),
            ("box-direction", &[Moz, Webkit, Ms]),
            ("box-flex", &[Moz, Webkit, Ms]),
            ("box-flex-group", &[Moz, Webkit, Ms]),
            ("box-lines", &[Moz, Webkit, Ms]),
            ("box-ordinal-group", &[Moz, Webkit, Ms]),
            ("box-orient", &[Moz, Webkit, Ms]),
            ("box-pack", &[Moz, Webkit, Ms]),
            ("box-shadow", &[Moz, Webkit, O]),
            ("box-sizing", &[Moz, Webkit]),
            ("column-count", &[Moz, Webkit]),
            ("column-gap", &[Moz, Webkit]),
            ("column-rule", &[Moz, Webkit]),
            ("column-rule-color", &[Moz, Webkit]),
            ("column-rule-style", &[Moz, Webkit]),
            ("column-rule-width", &[Moz, Webkit]),
            ("column-span", &[Moz, Webkit]),
            ("column-width", &[Moz, Webkit]),
            ("columns", &[Moz, Webkit]),
            ("filter", &[Ms]),
            ("grid-column", &[Ms]),
            ("grid-column-align", &[Ms]),
            ("grid-column-span", &[Ms]),
            ("grid-columns", &[Ms]),
            ("grid-layer", &[Ms]),
            ("grid-row", &[Ms]),
            ("grid-row-align", &[Ms]),
            ("grid-row-span", &[Ms]),
            ("grid-rows", &[Ms]),
            ("hyphens", &[Moz, Epub]),
            ("opacity", &[Moz, Webkit]),
            ("text-overflow", &[O]),
            ("transform", &[Moz, Webkit, O, Ms]),
            ("transform-origin", &[Moz, Webkit, O, Ms]),
            ("transition", &[Moz, Webkit, O]),
            ("transition-delay", &[Moz, Webkit, O]),
            ("transition-duration", &[Moz, Webkit, O]),
            ("transition-property", &[Moz, Webkit, O]),
            ("transition-timing-function", &[Moz, Webkit, O]),
            ("user-select", &[Moz, Webkit]),
        ];

        let property_generators: &[(&str, Generator)] = &[
            ("border-top-left-radius", Generator::BorderRadius),
            ("border-top-right-radius", Generator::BorderRadius),
            ("border-bottom-left-radius", Generator::BorderRadius),
            ("border-bottom-right-radius", Generator::BorderRadius),
        ];

        let value_prefixes: &[(&str, &[(&str, &[Vendor])])] = &[
            ("display", &[("box", &[Moz, Webkit]), ("inline-block", &[Moz])]),
            ("background", &[("linear-gradient", &[Moz, Webkit])]),
            ("background-image", &[("linear-gradient", &[Moz, Webkit])]),
        ];

        let value_generators: &[(&str, &[(&str, Generator)])] = &[
            ("background", &[("linear-gradient", Generator::LinearGradient)]),
            (
                "background-image",
                &[("linear-gradient", Generator::LinearGradient)],
            ),
        ];

        Self {
            property_prefixes: property_prefixes
                .iter()
                .map(|(property, vendors)| (property.to_string(), vendors.to_vec()))
                .collect(),
            property_generators: property_generators
                .iter()
                .map(|(property, generator)| (property.to_string(), *generator))
                .collect(),
            value_prefixes: value_prefixes
                .iter()
                .map(|(property, entries)| {
                    let entries = entries
                        .iter()
                        .map(|(pattern, vendors)| ValuePrefixEntry {
                            pattern: pattern.to_string(),
                            vendors: vendors.to_vec(),
                        })
                        .collect();
                    (property.to_string(), entries)
                })
                .collect(),
            value_generators: value_generators
                .iter()
                .map(|(property, entries)| {
                    let entries = entries
                        .iter()
                        .map(|(pattern, generator)| ValueGeneratorEntry {
                            pattern: pattern.to_string(),
                            generator: *generator,
                        })
                        .collect();
                    (property.to_string(), entries)
                })
                .collect(),
            selector_prefixes: vec![SelectorPrefixEntry {
                pattern: "::selection".to_string(),
                replacements: vec!["::-moz-selection".to_string()],
            }],
        }
    }
}
