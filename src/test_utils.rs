//! Test utilities for lotto-ticket
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Ticket, TicketBuilder, TicketId};
use crate::storage::{LoadPolicy, TicketManager};
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture pairing a store with a data file in a temporary directory
pub struct TestStore {
    pub temp_dir: TempDir,
    pub data_file: PathBuf,
    pub manager: TicketManager,
}

impl TestStore {
    /// Create an empty store; the data file does not exist yet
    pub fn new() -> Self {
        Self::with_policy(LoadPolicy::Abort)
    }

    pub fn with_policy(policy: LoadPolicy) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("product.csv");

        Self {
            temp_dir,
            data_file,
            manager: TicketManager::with_policy(policy),
        }
    }

    /// Create a store holding tickets 1, 2 and 3
    pub fn with_sample_tickets() -> Self {
        let mut store = Self::new();

        let tickets = vec![
            create_test_ticket(1, "Mega Millions", &["3", "14", "15", "22", "35", "41"]),
            create_test_ticket(2, "Powerball", &["1", "9", "17", "28", "33", "45"]),
            create_test_ticket(3, "Unknown", &["2", "4", "6", "8", "10", "12"]),
        ];

        for ticket in tickets {
            store.manager.add(ticket).expect("Failed to add ticket");
        }

        store
    }

    /// Overwrite the data file with raw content
    pub fn write_data(&mut self, content: &str) {
        std::fs::write(&self.data_file, content).expect("Failed to write data file");
    }
}

/// Create a test ticket dated 2024-01-01
pub fn create_test_ticket(id: u64, product: &str, values: &[&str]) -> Ticket {
    TicketBuilder::new()
        .id(TicketId::from_value(id))
        .date(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"))
        .product(product)
        .numbers(values.iter().copied())
        .build()
        .expect("Failed to build ticket")
}

/// Ticket with the given id and default contents
pub fn sample_ticket(id: u64) -> Ticket {
    create_test_ticket(id, "Sample", &["1", "2", "3", "4", "5", "6"])
}

/// Owned number list from string literals
pub fn numbers(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = TestStore::new();
        assert!(store.manager.is_empty());
        assert!(!store.data_file.exists());
    }

    #[test]
    fn test_store_with_sample_tickets() {
        let store = TestStore::with_sample_tickets();
        assert_eq!(store.manager.len(), 3);
        assert_eq!(store.manager.next_id(), Some(4));
    }
}
