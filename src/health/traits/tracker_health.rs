#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait TrackerHealth: Send + Sync {
    fn is_blacklisted(&self, address: &str) -> bool;

    fn blacklist(&self, address: &str);

    fn mark_eligible(&self, address: &str);
}
