// Page wiring and UI timing constants for the browser front-end.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "spray-canvas";
pub const MENU_HANDLE_ID: &str = "menu-handle";
pub const MENU_PANEL_ID: &str = "menu-panel";
pub const CAP_LIST_ID: &str = "cap-list";
pub const DOWNLOAD_BUTTON_ID: &str = "download-btn";
pub const CLEAR_BUTTON_ID: &str = "clear-btn";

// Class names toggled on menu elements
pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";

// Clear acknowledgement flash
pub const FLASH_STYLE: &str = "position:fixed;inset:0;background:rgba(255,255,255,0.15);pointer-events:none;opacity:1;transition:opacity 260ms ease";
pub const FLASH_REMOVE_MS: i32 = 300;

// Paint colour
pub const PAINT_COLOR_HEX: &str = "#ffffff";
