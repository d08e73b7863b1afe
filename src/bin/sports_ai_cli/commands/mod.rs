// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for sports-ai-cli
// ABOUTME: Static reference lookups and commands over the seeded demo population

pub mod demo;
pub mod reference;
