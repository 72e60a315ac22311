use crate::query_client::{ParameterContributor, QueryParams};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// EC2 result filter, sent as `Filter.{n}.Name` / `Filter.{n}.Value.{m}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Filter {
    values: BTreeMap<String, Vec<String>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, value: &str) {
        self.values
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParameterContributor for Filter {
    fn add_params(&self, params: &mut QueryParams) {
        // names iterate sorted, so numbering is stable between calls
        for (i, (name, values)) in self.values.iter().enumerate() {
            let prefix = format!("Filter.{}", i + 1);
            params.insert(format!("{}.Name", prefix), name.clone());
            for (j, value) in values.iter().enumerate() {
                params.insert(format!("{}.Value.{}", prefix, j + 1), value.clone());
            }
        }
    }
}
