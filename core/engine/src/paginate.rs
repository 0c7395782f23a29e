//! FILENAME: core/engine/src/paginate.rs
//! Fixed-size page windows over the ungrouped filtered list.
//!
//! Only the global display mode paginates; grouped modes render every
//! bucket in full. Pages are 1-based. An empty filtered list still
//! reports one (empty) page so the view always has a valid page.

use crate::record::EquipmentRecord;

/// Records per page in global mode.
pub const PAGE_SIZE: usize = 10;

/// Number of pages for a filtered list of length `len`; at least 1.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// The window `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of `filtered`.
///
/// `page` is clamped into `1..=page_count(filtered.len())`, so callers
/// navigating past a boundary get the boundary page back.
pub fn paginate<'a, 'b>(
    filtered: &'b [&'a EquipmentRecord],
    page: usize,
) -> &'b [&'a EquipmentRecord] {
    let page = page.clamp(1, page_count(filtered.len()));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(filtered.len());
    if start >= filtered.len() {
        &[]
    } else {
        &filtered[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<EquipmentRecord> {
        (0..n as u32)
            .map(|i| EquipmentRecord::new(i, format!("Item {}", i), 1))
            .collect()
    }

    #[test]
    fn page_count_is_ceiling_with_minimum_one() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn concatenated_pages_reproduce_the_filtered_list() {
        let all = records(25);
        let filtered: Vec<&EquipmentRecord> = all.iter().collect();

        let mut rebuilt: Vec<u32> = Vec::new();
        for page in 1..=page_count(filtered.len()) {
            rebuilt.extend(paginate(&filtered, page).iter().map(|r| r.id));
        }
        let expected: Vec<u32> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let all = records(25);
        let filtered: Vec<&EquipmentRecord> = all.iter().collect();
        assert_eq!(paginate(&filtered, 3).len(), 5);
    }

    #[test]
    fn out_of_range_pages_clamp_to_boundaries() {
        let all = records(15);
        let filtered: Vec<&EquipmentRecord> = all.iter().collect();
        // Page 0 clamps to the first page, page 99 to the last.
        assert_eq!(paginate(&filtered, 0)[0].id, 0);
        assert_eq!(paginate(&filtered, 99)[0].id, 10);
    }

    #[test]
    fn empty_list_yields_one_empty_page() {
        let filtered: Vec<&EquipmentRecord> = Vec::new();
        assert_eq!(page_count(0), 1);
        assert!(paginate(&filtered, 1).is_empty());
    }
}
