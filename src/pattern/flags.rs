use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MatchFlags: u8 {
        const CASE_INSENSITIVE = 1 << 0;
        const DOT_ALL = 1 << 1;
    }
}

impl Default for MatchFlags {
    fn default() -> Self {
        MatchFlags::CASE_INSENSITIVE | MatchFlags::DOT_ALL
    }
}
