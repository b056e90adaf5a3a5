/// One pending flag per floor. Requests are coalesced: setting a flag that is
/// already set changes nothing.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FloorSet {
    flags: Vec<bool>,
}

impl FloorSet {
    pub fn new(num_floors: u8) -> Self {
        FloorSet {
            flags: vec![false; num_floors as usize],
        }
    }

    /// Returns false, leaving the set untouched, if the floor is out of range.
    pub fn insert(&mut self, floor: u8) -> bool {
        match self.flags.get_mut(floor as usize) {
            Some(flag) => {
                *flag = true;
                true
            },
            None => false,
        }
    }

    pub fn remove(&mut self, floor: u8) {
        if let Some(flag) = self.flags.get_mut(floor as usize) {
            *flag = false;
        }
    }

    pub fn is_pending(&self, floor: u8) -> bool {
        self.flags.get(floor as usize).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|flag| *flag)
    }

    /// Lowest-indexed pending floor. This is the dispatch order.
    pub fn lowest(&self) -> Option<u8> {
        self.flags.iter().position(|flag| *flag).map(|floor| floor as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_coalesces_duplicates() {
        let mut once = FloorSet::new(4);
        once.insert(2);
        let mut twice = FloorSet::new(4);
        twice.insert(2);
        twice.insert(2);
        assert_eq!(once, twice);
    }

    #[test]
    fn out_of_range_insert_is_rejected() {
        let mut set = FloorSet::new(4);
        assert!(!set.insert(4));
        assert!(!set.insert(u8::MAX));
        assert!(!set.any());
    }

    #[test]
    fn lowest_picks_smallest_index() {
        let mut set = FloorSet::new(4);
        assert_eq!(set.lowest(), None);
        set.insert(3);
        set.insert(1);
        set.insert(2);
        assert_eq!(set.lowest(), Some(1));
        set.remove(1);
        assert_eq!(set.lowest(), Some(2));
    }
}
