// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod budget;
pub mod debts;
pub mod error;
pub mod goals;
pub mod models;
pub mod overview;
pub mod period;
pub mod transfers;
pub mod utils;

pub use error::{Error, Result};
