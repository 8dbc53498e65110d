//! Closed vocabularies used by the probability table and generated records.
//!
//! Each vocabulary is serialized as a `snake_case` tag. Unknown tags are
//! rejected when a table is parsed, so downstream code can match exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of vehicle on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Car,
    Truck,
}

impl TransportType {
    /// Tag used in configuration documents and rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Car => "car",
            TransportType::Truck => "truck",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine fitted to a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Hybrid,
    Gas,
    Electric,
    Gasoline,
}

impl EngineType {
    /// Tag used in configuration documents and rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::Hybrid => "hybrid",
            EngineType::Gas => "gas",
            EngineType::Electric => "electric",
            EngineType::Gasoline => "gasoline",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal category of a cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CargoType {
    Allowed,
    PermissionRequired,
    Banned,
}

impl CargoType {
    /// Tag used in configuration documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoType::Allowed => "allowed",
            CargoType::PermissionRequired => "permission_required",
            CargoType::Banned => "banned",
        }
    }
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
