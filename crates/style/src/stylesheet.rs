//! Maps class tags to the visual rules a renderer emits for them.
//!
//! The tiling core only decides which tags a path carries; what `fill-1`
//! looks like is entirely the stylesheet's business.

use crate::classes::ClassSet;
use crate::parsers::parse_rules;
use crate::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tilebg_types::Color;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl FromStr for LineCap {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            _ => Err(StyleError::InvalidValue {
                property: "stroke-linecap".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

/// Presentation properties for one class.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_linecap: Option<LineCap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
}

impl StyleRule {
    fn set_property(&mut self, property: &str, value: &str) -> Result<(), StyleError> {
        let invalid = || StyleError::InvalidValue {
            property: property.to_string(),
            value: value.to_string(),
        };
        match property {
            "stroke" => self.stroke = Some(value.parse().map_err(|_| invalid())?),
            "stroke-width" => {
                let width: f32 = value.parse().map_err(|_| invalid())?;
                if !width.is_finite() || width < 0.0 {
                    return Err(invalid());
                }
                self.stroke_width = Some(width);
            }
            "stroke-linecap" => self.stroke_linecap = Some(value.parse()?),
            "fill" => self.fill = Some(value.parse().map_err(|_| invalid())?),
            _ => return Err(StyleError::UnknownProperty(property.to_string())),
        }
        Ok(())
    }

    /// `stroke:#202020; stroke-width:1; ...` in a fixed property order.
    pub fn declarations(&self) -> String {
        let mut parts = Vec::new();
        if let Some(stroke) = self.stroke {
            parts.push(format!("stroke:{}; ", stroke));
        }
        if let Some(width) = self.stroke_width {
            parts.push(format!("stroke-width:{}; ", width));
        }
        if let Some(cap) = self.stroke_linecap {
            parts.push(format!("stroke-linecap:{}; ", cap));
        }
        if let Some(fill) = self.fill {
            parts.push(format!("fill:{}; ", fill));
        }
        parts.concat()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClassRule {
    pub class: String,
    #[serde(flatten)]
    pub style: StyleRule,
}

/// An ordered list of class rules.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Stylesheet {
    pub rules: Vec<ClassRule>,
}

impl Default for Stylesheet {
    /// Dark grey outlines over three grey fill shades.
    fn default() -> Self {
        let stroke = StyleRule {
            stroke: Some(Color::gray(0x20)),
            stroke_width: Some(1.0),
            stroke_linecap: Some(LineCap::Round),
            fill: None,
        };
        let fill = |value: u8| StyleRule {
            fill: Some(Color::gray(value)),
            ..Default::default()
        };
        Self {
            rules: vec![
                ClassRule { class: "stroke".to_string(), style: stroke },
                ClassRule { class: "fill-0".to_string(), style: fill(0x30) },
                ClassRule { class: "fill-1".to_string(), style: fill(0x40) },
                ClassRule { class: "fill-2".to_string(), style: fill(0x50) },
            ],
        }
    }
}

impl Stylesheet {
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        serde_json::from_str(source).map_err(|e| StyleError::Parse(e.to_string()))
    }

    /// Parses `.class { property: value; ... }` blocks. A class may appear
    /// more than once; later declarations override earlier ones.
    pub fn from_css(source: &str) -> Result<Self, StyleError> {
        let mut sheet = Stylesheet { rules: Vec::new() };
        for raw in parse_rules(source)? {
            let index = match sheet.rules.iter().position(|r| r.class == raw.class) {
                Some(index) => index,
                None => {
                    sheet.rules.push(ClassRule {
                        class: raw.class.to_string(),
                        style: StyleRule::default(),
                    });
                    sheet.rules.len() - 1
                }
            };
            for (property, value) in raw.declarations {
                sheet.rules[index].style.set_property(property, value)?;
            }
        }
        Ok(sheet)
    }

    pub fn get(&self, class: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.class == class).map(|r| &r.style)
    }

    /// Classes in `classes` this stylesheet has no rule for.
    pub fn missing<'a>(&self, classes: &'a ClassSet) -> Vec<&'a str> {
        classes.iter().filter(|c| self.get(c).is_none()).collect()
    }

    /// One `.class { ... }` line per rule, each indented by `indent`.
    pub fn to_css(&self, indent: &str) -> String {
        self.rules
            .iter()
            .map(|r| format!("{}.{} {{ {}}}", indent, r.class, r.style.declarations()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
