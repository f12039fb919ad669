// ABOUTME: Helper modules for fittracker-cli
// ABOUTME: JSON document input and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

pub mod io;
