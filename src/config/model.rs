use crate::page::PageConfig;

#[derive(Debug)]
pub struct Config {
    pub page: PageConfig,
}
