//! Mindscale - Psychometric Assessment Scoring Service
//!
//! This crate scores and interprets responses to three psychometric
//! instruments (a job-satisfaction survey, a forced-choice personality
//! inventory, and a clinical symptom checklist) and persists the resulting
//! assessment records per user.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
