//! Linear mapping from data values to screen sizes.

/// Maps `domain` onto `range` linearly, clamping outside the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn apply(&self, value: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		let span = d1 - d0;
		// degenerate domain maps to the middle of the range
		if span.abs() < f64::EPSILON {
			return (r0 + r1) / 2.0;
		}
		let t = ((value - d0) / span).clamp(0.0, 1.0);
		r0 + t * (r1 - r0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_and_clamps() {
		let scale = LinearScale::new((0.0, 1.0), (4.0, 12.0));
		assert_eq!(scale.apply(0.0), 4.0);
		assert_eq!(scale.apply(0.5), 8.0);
		assert_eq!(scale.apply(1.0), 12.0);
		assert_eq!(scale.apply(3.0), 12.0);
		assert_eq!(scale.apply(-1.0), 4.0);
	}

	#[test]
	fn degenerate_domain() {
		let scale = LinearScale::new((0.5, 0.5), (4.0, 12.0));
		assert_eq!(scale.apply(0.5), 8.0);
	}
}
