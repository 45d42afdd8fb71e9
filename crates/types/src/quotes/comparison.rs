//! Ranking quotes that compete for the same swap

use std::cmp::Ordering;

use super::{Quote, QuoteError, QuoteResult};
use crate::requests::{RoutingType, TradeType};

/// Order two quotes so that the better one is `Greater`
///
/// Exact-input quotes rank on effective output (more is better), exact-output
/// quotes on effective input (less is better).
pub fn compare_quotes(a: &Quote, b: &Quote) -> QuoteResult<Ordering> {
	if a.trade_type() != b.trade_type() {
		return Err(QuoteError::TradeTypeMismatch {
			left: a.trade_type(),
			right: b.trade_type(),
		});
	}

	let ordering = a.effective_amount().cmp(&b.effective_amount());
	Ok(match a.trade_type() {
		TradeType::ExactInput => ordering,
		TradeType::ExactOutput => ordering.reverse(),
	})
}

/// Pick the best of a set of competing quotes
///
/// On a tie a quote of the `preferred` routing type wins; otherwise the
/// earliest of the tied quotes is kept. Quotes whose trade type differs from
/// the first quote are skipped.
pub fn select_best_quote<'a, I>(quotes: I, preferred: Option<RoutingType>) -> Option<&'a Quote>
where
	I: IntoIterator<Item = &'a Quote>,
{
	let mut best: Option<&'a Quote> = None;

	for candidate in quotes {
		let Some(current) = best else {
			best = Some(candidate);
			continue;
		};

		match compare_quotes(candidate, current) {
			Ok(Ordering::Greater) => best = Some(candidate),
			Ok(Ordering::Equal) => {
				let candidate_preferred = preferred == Some(candidate.routing_type());
				let current_preferred = preferred == Some(current.routing_type());
				if candidate_preferred && !current_preferred {
					best = Some(candidate);
				}
			},
			Ok(Ordering::Less) | Err(_) => {},
		}
	}

	best
}
