pub const APP_RESOURCES: &[u8] = include_bytes!(env!("APP_RESOURCES"));
pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_PREFIX: &str = env!("APP_PREFIX");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_DESCRIPTION: &str = env!("APP_DESCRIPTION");
pub const APP_AUTHOR: &str = env!("APP_AUTHOR");

pub const USER_AGENT: &str = concat!(env!("APP_NAME"), "/", env!("APP_VERSION"));

pub const DEFAULT_ENDPOINT: &str = "https://api.thedogapi.com/v1/images/search";
pub const DEFAULT_LIMIT: usize = 20;

pub const CURRENCY_SYMBOL: &str = "£";
pub const MIN_PRICE_CENTS: u64 = 20_000;
pub const MAX_PRICE_CENTS: u64 = 80_000;
