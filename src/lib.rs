// Copyright 2023 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! Core of an interactive chessboard editor.
//!
//! Chessmen can be added, moved and removed freely on an 8x8 board; the
//! rules of chess are not enforced beyond a few editing invariants (one
//! king and at most eight pawns per color, kings are never captured or
//! removed). Every successful command yields a new `BoardState`, records
//! it in the `History` and reports whether a king is in check.

mod board;
mod game;

pub use board::*;
pub use game::*;
