use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartGeometry, LineChart};

pub const CHART_GEOMETRY_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometryJsonContractV1 {
    pub schema_version: u32,
    pub geometry: ChartGeometry,
}

impl ChartGeometry {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartGeometryJsonContractV1 {
            schema_version: CHART_GEOMETRY_JSON_SCHEMA_V1,
            geometry: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize geometry contract v1: {e}"))
        })
    }

    /// Accepts either a bare geometry document or a versioned contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(geometry) = serde_json::from_str::<ChartGeometry>(input) {
            return Ok(geometry);
        }
        let payload: ChartGeometryJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse geometry json payload: {e}"))
        })?;
        if payload.schema_version != CHART_GEOMETRY_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported geometry schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.geometry)
    }
}

impl LineChart {
    pub fn geometry_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.geometry.to_json_contract_v1_pretty()
    }
}
