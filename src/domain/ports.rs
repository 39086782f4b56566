use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}
