//! # Response Formatting
//!
//! Success envelopes shared by every endpoint.

use serde::Serialize;

/// Single payload response
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// List response carrying the item count
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            success: true,
            data,
            total,
        }
    }
}
