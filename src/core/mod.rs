//! Core business logic - framework-agnostic waste-bank operations.
//!
//! All functions here take a `&DatabaseConnection` and return `Result`,
//! leaving presentation and file-format concerns to external layers.

/// Credential check: NIS and admin access code resolution
pub mod auth;
/// Waste-type catalog: conversion-rate reference data and seeding
pub mod catalog;
/// Class roster management
pub mod class;
/// Deposit recording for both the bottle and legacy weight regimes
pub mod deposit;
/// Spreadsheet row normalization and batch import
pub mod import;
/// Reward ledger computation: bottles, trashbags, availability
pub mod ledger;
/// Dashboard aggregates and export records
pub mod report;
/// Legacy Rupiah savings ledger and its withdrawal workflow
pub mod savings;
/// Student account management
pub mod student;
/// Trashbag withdrawal workflow state machine
pub mod withdrawal;
