// ABOUTME: Common benchmark utilities and fixtures for evaluation performance testing
// ABOUTME: Provides reusable frame-stream generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
