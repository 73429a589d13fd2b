use serde::Deserialize;
use serde::Serialize;

use k8_types::app::WorkloadCondition;
use k8_types::certmanager::certificate::CertificateCondition;
use k8_types::core::pod::PodCondition;

use crate::time::{format_optional_time, format_time, parse_optional_time, parse_time};
use crate::TranslateError;

/// Canonical status condition, superset of every native condition shape
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_probe_time: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub observed_generation: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Condition {
    pub fn new<T: Into<String>, S: Into<String>>(type_: T, status: S) -> Self {
        Self {
            type_: type_.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    pub fn is_true(&self) -> bool {
        self.status == "True"
    }
}

/// Native condition representation
pub trait ConditionDialect: Sized {
    fn to_condition(&self) -> Condition;

    fn from_condition(condition: &Condition) -> Result<Self, TranslateError>;
}

/// element wise projection, order is kept and nothing is dropped
pub fn map_conditions<C: ConditionDialect>(conditions: &[C]) -> Vec<Condition> {
    conditions.iter().map(ConditionDialect::to_condition).collect()
}

pub fn unmap_conditions<C: ConditionDialect>(
    conditions: &[Condition],
) -> Result<Vec<C>, TranslateError> {
    conditions.iter().map(C::from_condition).collect()
}

impl ConditionDialect for PodCondition {
    fn to_condition(&self) -> Condition {
        Condition {
            type_: self.type_.clone(),
            status: self.status.clone(),
            reason: self.reason.clone(),
            message: self.message.clone(),
            last_transition_time: format_time(&self.last_transition_time),
            last_probe_time: format_time(&self.last_probe_time),
            ..Default::default()
        }
    }

    fn from_condition(condition: &Condition) -> Result<Self, TranslateError> {
        Ok(Self {
            type_: condition.type_.clone(),
            status: condition.status.clone(),
            reason: condition.reason.clone(),
            message: condition.message.clone(),
            last_transition_time: parse_time(condition.last_transition_time.as_deref())?,
            last_probe_time: parse_time(condition.last_probe_time.as_deref())?,
        })
    }
}

impl ConditionDialect for WorkloadCondition {
    fn to_condition(&self) -> Condition {
        Condition {
            type_: self.type_.clone(),
            status: self.status.clone(),
            reason: self.reason.clone(),
            message: self.message.clone(),
            last_transition_time: format_time(&self.last_transition_time),
            last_update_time: format_time(&self.last_update_time),
            ..Default::default()
        }
    }

    fn from_condition(condition: &Condition) -> Result<Self, TranslateError> {
        Ok(Self {
            type_: condition.type_.clone(),
            status: condition.status.clone(),
            reason: condition.reason.clone(),
            message: condition.message.clone(),
            last_transition_time: parse_time(condition.last_transition_time.as_deref())?,
            last_update_time: parse_time(condition.last_update_time.as_deref())?,
        })
    }
}

impl ConditionDialect for CertificateCondition {
    fn to_condition(&self) -> Condition {
        Condition {
            type_: self.type_.clone(),
            status: self.status.clone(),
            reason: self.reason.clone(),
            message: self.message.clone(),
            last_transition_time: format_optional_time(self.last_transition_time.as_ref()),
            observed_generation: self.observed_generation,
            ..Default::default()
        }
    }

    fn from_condition(condition: &Condition) -> Result<Self, TranslateError> {
        Ok(Self {
            type_: condition.type_.clone(),
            status: condition.status.clone(),
            reason: condition.reason.clone(),
            message: condition.message.clone(),
            last_transition_time: parse_optional_time(condition.last_transition_time.as_deref())?,
            observed_generation: condition.observed_generation,
        })
    }
}
