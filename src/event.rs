/// All events the app loop handles.
#[derive(Debug)]
pub enum AppEvent {
    /// Something under the listed directory changed; reload the listing.
    TreeChanged,
    /// Launch script finished: None = success, Some = failure reason.
    LaunchComplete(Option<String>),
}
