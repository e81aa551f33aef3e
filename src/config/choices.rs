use crate::bounds::{HardRange, RateMode};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_floor() -> f32 {
    HardRange::DEFAULT_FLOOR
}
fn default_decay() -> f32 {
    0.0
}
fn default_soft_decay() -> f32 {
    0.01
}
fn default_soft_growth() -> f32 {
    0.1
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HardRangeParams {
    #[serde(default)]
    #[schemars(
        title = "Floating lower bound",
        description = "Track the true minimum instead of pinning the lower bound at the floor. \
                       Always on when `lower` is given."
    )]
    pub floating_lower: bool,

    #[serde(default = "default_floor")]
    #[schemars(
        title = "Floor",
        description = "Value the lower bound is pinned at while not floating."
    )]
    pub floor: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Initial lower bound", description = "Requires `upper`.")]
    pub lower: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Initial upper bound")]
    pub upper: Option<f32>,
}
impl Default for HardRangeParams {
    fn default() -> Self {
        Self {
            floating_lower: false,
            floor: default_floor(),
            lower: None,
            upper: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DecayEnvelopeParams {
    #[serde(default = "default_decay")]
    #[schemars(
        title = "Decay",
        description = "Per-update pull of the bounds toward the latest sample.",
        range(min = 0.0)
    )]
    pub decay: f32,

    #[serde(default)]
    #[schemars(title = "Decay mode")]
    pub decay_mode: RateMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Initial lower bound", description = "Requires `upper`.")]
    pub lower: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Initial upper bound")]
    pub upper: Option<f32>,
}
impl Default for DecayEnvelopeParams {
    fn default() -> Self {
        Self {
            decay: default_decay(),
            decay_mode: RateMode::default(),
            lower: None,
            upper: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SoftEnvelopeParams {
    #[serde(default = "default_soft_decay")]
    #[schemars(
        title = "Decay",
        description = "Per-update pull of the bounds toward the latest sample.",
        range(min = 0.0)
    )]
    pub decay: f32,

    #[serde(default = "default_soft_growth")]
    #[schemars(
        title = "Growth",
        description = "Per-update push of an escaped bound toward the new extreme.",
        range(min = 0.0)
    )]
    pub growth: f32,

    #[serde(default)]
    #[schemars(title = "Decay mode")]
    pub decay_mode: RateMode,

    #[serde(default)]
    #[schemars(title = "Growth mode")]
    pub growth_mode: RateMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Initial lower bound", description = "Requires `upper`.")]
    pub lower: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(title = "Initial upper bound")]
    pub upper: Option<f32>,
}
impl Default for SoftEnvelopeParams {
    fn default() -> Self {
        Self {
            decay: default_soft_decay(),
            growth: default_soft_growth(),
            decay_mode: RateMode::default(),
            growth_mode: RateMode::default(),
            lower: None,
            upper: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TrackerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TrackerChoice {
    #[strum_discriminants(strum(
        message = "Hard Range",
        detailed_message = "Exact min/max of every sample, optionally with a pinned floor."
    ))]
    HardRange(HardRangeParams),
    #[strum_discriminants(strum(
        message = "Decay Envelope",
        detailed_message = "Snaps to new extremes and decays back toward recent samples."
    ))]
    DecayEnvelope(DecayEnvelopeParams),
    #[strum_discriminants(strum(
        message = "Soft Envelope",
        detailed_message = "Grows gradually toward new extremes and decays toward recent samples."
    ))]
    SoftEnvelope(SoftEnvelopeParams),
}

impl TrackerChoice {
    pub fn schema() -> Schema {
        schema_for!(TrackerChoice)
    }

    pub fn default_for(kind: TrackerKind) -> Self {
        match kind {
            TrackerKind::HardRange => Self::HardRange(HardRangeParams::default()),
            TrackerKind::DecayEnvelope => Self::DecayEnvelope(DecayEnvelopeParams::default()),
            TrackerKind::SoftEnvelope => Self::SoftEnvelope(SoftEnvelopeParams::default()),
        }
    }

    pub fn kind(&self) -> TrackerKind {
        TrackerKind::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn deserializes_tagged_choice_with_defaults() {
        let c: TrackerChoice = serde_json::from_value(json!({
            "type": "decay-envelope",
            "params": { "decay": 0.2 }
        }))
        .unwrap();
        assert_eq!(
            c,
            TrackerChoice::DecayEnvelope(DecayEnvelopeParams {
                decay: 0.2,
                ..DecayEnvelopeParams::default()
            })
        );
        assert_eq!(c.kind(), TrackerKind::DecayEnvelope);
    }

    #[test]
    fn modes_use_kebab_case() {
        let c: TrackerChoice = serde_json::from_value(json!({
            "type": "soft-envelope",
            "params": { "growth": 2.0, "growth_mode": "linear" }
        }))
        .unwrap();
        match c {
            TrackerChoice::SoftEnvelope(p) => {
                assert_eq!(p.growth_mode, RateMode::Linear);
                assert_eq!(p.decay_mode, RateMode::Exponential);
                assert_eq!(p.decay, 0.01);
            }
            other => panic!("unexpected choice: {other:?}"),
        }
    }

    #[test]
    fn serializes_without_unset_bounds() {
        let v = serde_json::to_value(TrackerChoice::default_for(TrackerKind::HardRange)).unwrap();
        assert_eq!(v["type"], "hard-range");
        assert!(v["params"].get("lower").is_none());
        assert_eq!(v["params"]["floating_lower"], false);
    }

    #[test]
    fn kinds_round_trip_through_strings() {
        let names: Vec<&'static str> = TrackerKind::iter().map(Into::into).collect();
        assert_eq!(names, ["hard-range", "decay-envelope", "soft-envelope"]);
        assert_eq!(
            TrackerKind::from_str("soft-envelope").unwrap(),
            TrackerKind::SoftEnvelope
        );
        for kind in TrackerKind::iter() {
            assert_eq!(TrackerChoice::default_for(kind).kind(), kind);
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let r: Result<TrackerChoice, _> =
            serde_json::from_value(json!({ "type": "median", "params": {} }));
        assert!(r.is_err());
    }
}
