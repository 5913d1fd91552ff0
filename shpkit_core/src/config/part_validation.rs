use anyhow::{Result, bail, ensure};
use std::fmt::Display;

/// How part-start offsets of a polyline or polygon record are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartValidation {
	/// Take offsets as declared. A part whose end does not lie after its start is empty.
	#[default]
	Trust,
	/// Require offsets to start at 0, never decrease and stay within the point count.
	Strict,
}

impl PartValidation {
	/// Turns declared part-start offsets into the number of points of every part.
	///
	/// Part `k` covers `offsets[k]..offsets[k + 1]`, the last part ends at `num_points`.
	/// When trusting the input, a part whose end does not lie after its start has no points.
	pub fn part_lengths(self, offsets: &[i32], num_points: usize) -> Result<Vec<usize>> {
		if self == PartValidation::Strict {
			check_offsets(offsets, num_points)?;
		}

		let mut lengths = Vec::with_capacity(offsets.len());
		for (k, &start) in offsets.iter().enumerate() {
			let start = i64::from(start);
			let end = offsets.get(k + 1).map_or(num_points as i64, |&end| i64::from(end));
			if end < start {
				log::debug!("part {k} declares offsets {start}..{end}, decoding it without points");
			}
			lengths.push((end - start).max(0) as usize);
		}
		Ok(lengths)
	}
}

fn check_offsets(offsets: &[i32], num_points: usize) -> Result<()> {
	if let Some(&first) = offsets.first() {
		ensure!(first == 0, "first part offset must be 0, found {first}");
	}
	let mut previous = 0i64;
	for (k, &offset) in offsets.iter().enumerate() {
		let offset = i64::from(offset);
		if offset < previous {
			bail!("part offset {offset} at index {k} is smaller than the previous offset {previous}");
		}
		if offset > num_points as i64 {
			bail!("part offset {offset} at index {k} exceeds point count {num_points}");
		}
		previous = offset;
	}
	Ok(())
}

impl Display for PartValidation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			PartValidation::Trust => "trust",
			PartValidation::Strict => "strict",
		})
	}
}
