//! Flattening of archive records into the snapshot schema.
//!
//! Units, buildings and techs come out of the archive as nested, sparse
//! structures; the presentation layer wants one flat record per entity
//! with deterministic zero defaults wherever a sub-block is absent.

use serde::Serialize;

use crate::dat::{ResourceCost, Tech, Unit};
use crate::round::{round_float, Rounded};

pub const RES_FOOD: i32 = 0;
pub const RES_WOOD: i32 = 1;
pub const RES_STONE: i32 = 2;
pub const RES_GOLD: i32 = 3;
pub const ARM_PIERCE: i32 = 3;

/// Offset mapping the game's internal help-string ids into the external
/// string table's numbering.
const HELP_DLL_OFFSET: i64 = 79000;

/// Per-resource cost of producing or researching an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cost {
    pub wood: i32,
    pub food: i32,
    pub gold: i32,
    pub stone: i32,
}

impl Cost {
    pub const ZERO: Cost = Cost {
        wood: 0,
        food: 0,
        gold: 0,
        stone: 0,
    };
}

/// Flattened unit or building record.
///
/// `localised_name` and `rms_const` are placeholders until the dataset
/// enrichment pass fills them in. Field order is the serialized order.
#[derive(Debug, Clone, Serialize)]
pub struct UnitEntry {
    pub cost: Cost,
    pub attack: i32,
    pub melee_armor: i32,
    pub pierce_armor: i32,
    pub base_id: i32,
    pub help_converter: i64,
    pub language_file_name: i64,
    pub language_file_help: i64,
    pub name: String,
    pub hit_points: i32,
    pub line_of_sight: Rounded,
    pub garrison_capacity: i32,
    #[serde(rename = "type")]
    pub kind: i32,
    pub class: i32,
    pub localised_name: String,
    pub rms_const: Option<String>,
}

/// Flattened technology record. Techs are never placed on the map, so
/// there is no `rms_const` field at all.
#[derive(Debug, Clone, Serialize)]
pub struct TechEntry {
    pub cost: Cost,
    pub help_converter: i64,
    pub language_file_name: i64,
    pub language_file_help: i64,
    pub name: String,
    pub localised_name: String,
}

/// First list entry matching `pred`, projected through `amount`, or 0.
///
/// Duplicate entries for the same resource type or armor class exist in
/// the archive; the first occurrence is the meaningful one.
fn first_amount<T>(items: &[T], pred: impl Fn(&T) -> bool, amount: impl Fn(&T) -> i32) -> i32 {
    items.iter().find(|item| pred(item)).map_or(0, amount)
}

fn resource_cost(costs: &[ResourceCost], kind: i32) -> i32 {
    first_amount(costs, |c| c.kind == kind, |c| c.amount)
}

fn cost_block(costs: &[ResourceCost]) -> Cost {
    Cost {
        wood: resource_cost(costs, RES_WOOD),
        food: resource_cost(costs, RES_FOOD),
        gold: resource_cost(costs, RES_GOLD),
        stone: resource_cost(costs, RES_STONE),
    }
}

/// Flatten one unit or building definition.
pub fn unit_entry(unit: &Unit) -> UnitEntry {
    let cost = unit
        .creatable
        .as_ref()
        .map_or(Cost::ZERO, |c| cost_block(&c.resource_costs));
    let pierce_armor = unit.type_50.as_ref().map_or(0, |t| {
        first_amount(&t.armours, |a| a.class == ARM_PIERCE, |a| a.amount)
    });
    UnitEntry {
        cost,
        attack: unit.type_50.as_ref().map_or(0, |t| t.displayed_attack),
        melee_armor: unit.type_50.as_ref().map_or(0, |t| t.displayed_melee_armour),
        pierce_armor,
        base_id: unit.base_id,
        help_converter: unit.language_dll_help - HELP_DLL_OFFSET,
        language_file_name: unit.language_dll_name,
        language_file_help: unit.language_dll_help,
        name: unit.name.clone(),
        hit_points: unit.hit_points,
        line_of_sight: round_float(unit.line_of_sight),
        garrison_capacity: unit.garrison_capacity,
        kind: unit.kind,
        class: unit.class,
        localised_name: String::new(),
        rms_const: None,
    }
}

/// Flatten one technology definition.
pub fn tech_entry(tech: &Tech) -> TechEntry {
    TechEntry {
        cost: cost_block(&tech.resource_costs),
        help_converter: tech.language_dll_help - HELP_DLL_OFFSET,
        language_file_name: tech.language_dll_name,
        language_file_help: tech.language_dll_help,
        name: tech.name.clone(),
        localised_name: String::new(),
    }
}
