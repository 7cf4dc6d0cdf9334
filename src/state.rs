#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HostState {
    Previewing, // Selected screensaver runs in the preview area only
    Fullscreen, // A second, independent instance covers the screen
}
