use crate::errors::CrawlerServerError;

pub trait Validate {
    fn validate(&self) -> Result<(), CrawlerServerError>;
}
