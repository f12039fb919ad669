// ABOUTME: Re-exports command modules for fittracker-cli
// ABOUTME: Stateless estimate commands and the store-backed daily dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

pub mod daily;
pub mod estimate;
