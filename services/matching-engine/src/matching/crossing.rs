//! Crossing detection logic
//!
//! Determines when a bid and ask can match based on price compatibility

use types::numeric::Price;

/// Check if a bid and ask can match at given prices
///
/// For a buy order to match with a sell order the buy price must be >= the
/// sell price. Equal prices cross.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}
