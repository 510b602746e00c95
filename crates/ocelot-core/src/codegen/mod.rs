// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Code synthesis for Ocelot.
//!
//! This module contains synthesis backends for different target languages:
//! - **`objective_c`**: Objective-C source synthesis (UIKit/Foundation target)
//!
//! Future modules may include:
//! - **`swift`**: Swift source synthesis

pub mod objective_c;
