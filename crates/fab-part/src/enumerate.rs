use crate::Partition;

/// Returns every partition of `total`, largest first part first.
///
/// Each level picks the leading part `k` from `min(ceiling, remaining)` down
/// to one and recurses on `remaining - k` with ceiling `k`, which keeps every
/// emitted sequence non-increasing.
pub fn partitions(total: u32) -> Vec<Partition> {
    let mut out = Vec::new();
    let mut prefix = Vec::new();
    fill(total, total, &mut prefix, &mut out);
    out
}

fn fill(remaining: u32, ceiling: u32, prefix: &mut Vec<u32>, out: &mut Vec<Partition>) {
    if remaining == 0 {
        out.push(Partition::from_canonical(prefix.clone()));
        return;
    }
    for part in (1..=ceiling.min(remaining)).rev() {
        prefix.push(part);
        fill(remaining - part, part, prefix, out);
        prefix.pop();
    }
}

/// Lazy iterator over the partitions of an integer.
///
/// Yields the same sequence as [`partitions`] without recursion and without
/// holding more than one partition at a time.
#[derive(Debug, Clone)]
pub struct Partitions {
    next: Option<Vec<u32>>,
}

impl Partitions {
    /// Starts the enumeration at the single-part partition `[total]`.
    pub fn new(total: u32) -> Self {
        let first = if total == 0 { Vec::new() } else { vec![total] };
        Self { next: Some(first) }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(Partition::from_canonical(current))
    }
}

impl std::iter::FusedIterator for Partitions {}

// Lowers the rightmost part above one and refills the tail greedily with
// parts no larger than the lowered value.
fn successor(current: &[u32]) -> Option<Vec<u32>> {
    let mut parts = current.to_vec();
    let mut freed = 0u32;
    while parts.last() == Some(&1) {
        parts.pop();
        freed += 1;
    }
    let last = parts.pop()?;
    let lowered = last - 1;
    parts.push(lowered);
    freed += 1;
    while freed >= lowered {
        parts.push(lowered);
        freed -= lowered;
    }
    if freed > 0 {
        parts.push(freed);
    }
    Some(parts)
}

/// Number of partitions of `total`, or `None` if it does not fit in a `u64`.
pub fn partition_count(total: u32) -> Option<u64> {
    let total = total as usize;
    let mut table = vec![0u64; total + 1];
    table[0] = 1;
    for part in 1..=total {
        for sum in part..=total {
            table[sum] = table[sum].checked_add(table[sum - part])?;
        }
    }
    Some(table[total])
}
