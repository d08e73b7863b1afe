// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for sports-ai-cli
// ABOUTME: Re-exports output formatting

pub mod output;
