pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
