// crates/infra/src/measurement/measurer.rs
use std::path::Path;

use line_counter_domain::lines::count_non_empty_lines;
use line_counter_ports::measurement::LineMeasurer;
use line_counter_shared_kernel::{InfrastructureError, LineCount, Result};

use crate::persistence::FileReader;

/// 行単位で非空行を数える。ファイルは UTF-8 テキストとして読み込む。
#[derive(Debug, Default, Clone, Copy)]
pub struct NonEmptyLineMeasurer;

impl NonEmptyLineMeasurer {
    pub fn new() -> Self {
        Self
    }
}

impl LineMeasurer for NonEmptyLineMeasurer {
    fn count_non_empty(&self, path: &Path) -> Result<LineCount> {
        let reader = FileReader::open_buffered(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        // reader はここで drop され、エラー時もハンドルは閉じられる
        let lines = count_non_empty_lines(reader).map_err(|e| InfrastructureError::from_read(path, e))?;
        Ok(lines)
    }
}
