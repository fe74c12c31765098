#[derive(Debug)]
pub struct GetDashboardQueryInternal {
    pub cluster: String,
}
