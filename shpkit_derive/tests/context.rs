use anyhow::{Result, bail, ensure};
use shpkit_derive::context;

#[context("Failed to read part {index}")]
fn read_part(index: usize, fail: bool) -> Result<usize> {
	ensure!(!fail, "unexpected end of record");
	Ok(index * 2)
}

#[context("Failed to decode record")]
fn decode_record(fail: bool) -> Result<usize> {
	let value = read_part(3, fail)?;
	Ok(value + 1)
}

struct Counter {
	calls: usize,
}

impl Counter {
	#[context("Failed to advance counter at {}", self.calls)]
	fn advance(&mut self, limit: usize) -> Result<usize> {
		if self.calls >= limit {
			bail!("limit reached");
		}
		self.calls += 1;
		Ok(self.calls)
	}
}

#[test]
fn passes_through_ok_values() {
	assert_eq!(decode_record(false).unwrap(), 7);
}

#[test]
fn wraps_errors_in_nested_context() {
	let err = decode_record(true).unwrap_err();
	let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
	assert_eq!(
		chain,
		vec![
			"Failed to decode record",
			"Failed to read part 3",
			"unexpected end of record"
		]
	);
}

#[test]
fn works_on_methods_with_mutable_self() {
	let mut counter = Counter { calls: 0 };
	assert_eq!(counter.advance(1).unwrap(), 1);
	let err = counter.advance(1).unwrap_err();
	assert_eq!(err.to_string(), "Failed to advance counter at 1");
	assert_eq!(err.root_cause().to_string(), "limit reached");
}
