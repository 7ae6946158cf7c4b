//! Row and cell types for the stats table

use std::cmp::Ordering;

use super::units::{decode_byte_size, decode_percent};

/// A decoded byte count paired with its original display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCell {
    /// Canonical magnitude in bytes
    pub bytes: u64,
    /// The token as it appeared in the stats output
    pub display: String,
}

impl ByteCell {
    /// Decodes a byte-size token, keeping the display text
    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        Some(Self {
            bytes: decode_byte_size(token)?,
            display: token.to_string(),
        })
    }
}

/// A decoded percentage paired with its original display text
#[derive(Debug, Clone, PartialEq)]
pub struct PercentCell {
    /// Canonical percentage value
    pub value: f64,
    /// The token as it appeared in the stats output
    pub display: String,
}

impl PercentCell {
    /// Decodes a percentage token, keeping the display text
    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        Some(Self {
            value: decode_percent(token)?,
            display: token.to_string(),
        })
    }
}

/// One parsed stats record.
///
/// Values are immutable once constructed; every numeric field carries
/// both the canonical decoded magnitude and the original display string,
/// and comparisons always use the magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    /// Container id (short form)
    pub container_id: String,
    /// Container name
    pub name: String,
    /// CPU usage
    pub cpu_percent: PercentCell,
    /// Memory in use
    pub mem_usage: ByteCell,
    /// Memory limit
    pub mem_limit: ByteCell,
    /// Memory usage as a share of the limit
    pub mem_percent: PercentCell,
    /// Network bytes received
    pub net_input: ByteCell,
    /// Network bytes sent
    pub net_output: ByteCell,
    /// Block device bytes read
    pub block_input: ByteCell,
    /// Block device bytes written
    pub block_output: ByteCell,
    /// Number of processes
    pub pids: u64,
    /// Derived running state (`pids != 0`)
    pub running: bool,
}

impl MetricRow {
    /// The label shown in the RUNS column
    #[must_use]
    pub const fn running_label(&self) -> &'static str {
        if self.running { "Yes" } else { "No" }
    }

    /// The typed cell for a column, used for comparison
    #[must_use]
    pub fn cell(&self, column: ColumnId) -> CellValue<'_> {
        match column {
            ColumnId::ContainerId => CellValue::Text(&self.container_id),
            ColumnId::Name => CellValue::Text(&self.name),
            ColumnId::CpuPercent => CellValue::Percent(self.cpu_percent.value),
            ColumnId::MemUsage => CellValue::Bytes(self.mem_usage.bytes),
            ColumnId::MemLimit => CellValue::Bytes(self.mem_limit.bytes),
            ColumnId::MemPercent => CellValue::Percent(self.mem_percent.value),
            ColumnId::NetInput => CellValue::Bytes(self.net_input.bytes),
            ColumnId::NetOutput => CellValue::Bytes(self.net_output.bytes),
            ColumnId::BlockInput => CellValue::Bytes(self.block_input.bytes),
            ColumnId::BlockOutput => CellValue::Bytes(self.block_output.bytes),
            ColumnId::Pids => CellValue::Count(self.pids),
            ColumnId::Running => CellValue::Text(self.running_label()),
        }
    }

    /// The display text for a column, used for rendering
    #[must_use]
    pub fn display_cell(&self, column: ColumnId) -> String {
        match column {
            ColumnId::ContainerId => self.container_id.clone(),
            ColumnId::Name => self.name.clone(),
            ColumnId::CpuPercent => self.cpu_percent.display.clone(),
            ColumnId::MemUsage => self.mem_usage.display.clone(),
            ColumnId::MemLimit => self.mem_limit.display.clone(),
            ColumnId::MemPercent => self.mem_percent.display.clone(),
            ColumnId::NetInput => self.net_input.display.clone(),
            ColumnId::NetOutput => self.net_output.display.clone(),
            ColumnId::BlockInput => self.block_input.display.clone(),
            ColumnId::BlockOutput => self.block_output.display.clone(),
            ColumnId::Pids => self.pids.to_string(),
            ColumnId::Running => self.running_label().to_string(),
        }
    }
}

/// Comparison domain of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Ordered by string comparison
    Lexical,
    /// Ordered by decoded percentage
    Percentage,
    /// Ordered by decoded byte count
    ByteSize,
    /// Ordered by integer value
    Integer,
}

/// Identifier of a presentation column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    /// CONTAINER ID
    ContainerId,
    /// NAME
    Name,
    /// CPU %
    CpuPercent,
    /// MEM USAGE
    MemUsage,
    /// LIMIT
    MemLimit,
    /// MEM %
    MemPercent,
    /// NET I
    NetInput,
    /// NET O
    NetOutput,
    /// BLOCK I
    BlockInput,
    /// BLOCK O
    BlockOutput,
    /// PIDS
    Pids,
    /// RUNS
    Running,
}

impl ColumnId {
    /// All columns in presentation order
    pub const ALL: [Self; 12] = [
        Self::ContainerId,
        Self::Name,
        Self::CpuPercent,
        Self::MemUsage,
        Self::MemLimit,
        Self::MemPercent,
        Self::NetInput,
        Self::NetOutput,
        Self::BlockInput,
        Self::BlockOutput,
        Self::Pids,
        Self::Running,
    ];

    /// Column header label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ContainerId => "CONTAINER ID",
            Self::Name => "NAME",
            Self::CpuPercent => "CPU %",
            Self::MemUsage => "MEM USAGE",
            Self::MemLimit => "LIMIT",
            Self::MemPercent => "MEM %",
            Self::NetInput => "NET I",
            Self::NetOutput => "NET O",
            Self::BlockInput => "BLOCK I",
            Self::BlockOutput => "BLOCK O",
            Self::Pids => "PIDS",
            Self::Running => "RUNS",
        }
    }

    /// Comparison domain of this column
    #[must_use]
    pub const fn domain(self) -> Domain {
        match self {
            Self::ContainerId | Self::Name | Self::Running => Domain::Lexical,
            Self::CpuPercent | Self::MemPercent => Domain::Percentage,
            Self::MemUsage
            | Self::MemLimit
            | Self::NetInput
            | Self::NetOutput
            | Self::BlockInput
            | Self::BlockOutput => Domain::ByteSize,
            Self::Pids => Domain::Integer,
        }
    }
}

impl std::str::FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "container" | "container-id" => Ok(Self::ContainerId),
            "name" => Ok(Self::Name),
            "cpu" => Ok(Self::CpuPercent),
            "usage" | "mem-usage" => Ok(Self::MemUsage),
            "limit" => Ok(Self::MemLimit),
            "mem" => Ok(Self::MemPercent),
            "net-in" | "neti" => Ok(Self::NetInput),
            "net-out" | "neto" => Ok(Self::NetOutput),
            "block-in" | "blocki" => Ok(Self::BlockInput),
            "block-out" | "blocko" => Ok(Self::BlockOutput),
            "pids" => Ok(Self::Pids),
            "runs" | "running" => Ok(Self::Running),
            other => Err(format!("unknown column: {other}")),
        }
    }
}

/// A typed cell value carrying the canonical comparison key.
///
/// Comparison dispatches on the tag; cells taken from the same column
/// always share a domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// Lexical value
    Text(&'a str),
    /// Canonical percentage
    Percent(f64),
    /// Canonical byte count
    Bytes(u64),
    /// Integer count
    Count(u64),
}

impl CellValue<'_> {
    /// Orders two cells of the same domain
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Percent(a), Self::Percent(b)) => a.total_cmp(b),
            (Self::Bytes(a), Self::Bytes(b)) | (Self::Count(a), Self::Count(b)) => a.cmp(b),
            // Mixed domains never come from the same column
            _ => Ordering::Equal,
        }
    }
}
