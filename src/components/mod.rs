// UI Components
// This module contains all reusable UI components

pub mod avatar;
pub mod button;
pub mod icons;
pub mod layout;
pub mod menu;
pub mod modal;
pub mod tooltip;

pub use avatar::{Avatar, AvatarGroup, AvatarShape, AvatarSize};
pub use button::{ActionButton, Button, ButtonOptions, ButtonType};
pub use layout::Sider;
pub use menu::{ItemTitle, Menu, MenuItem, MenuLabel, MenuMode, SubMenu};
pub use modal::{AutoFocusButton, ClosePayload, ConfirmDialog, ConfirmKind, DialogIcon, DialogSize, Modal};
pub use tooltip::{Placement, Tooltip};
