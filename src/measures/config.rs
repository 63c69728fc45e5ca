/// Grouping configuration shared by all gain measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GainConfig {
    /// How missing attribute values are partitioned.
    ///
    /// When `true` (the default), all missing observations fall into a
    /// single shared partition, which avoids inflating the gain with
    /// degenerate size-1 partitions. When `false`, every missing
    /// observation forms its own singleton partition.
    pub treat_missing_as_equal: bool,
}

impl Default for GainConfig {
    fn default() -> Self {
        Self {
            treat_missing_as_equal: true,
        }
    }
}
