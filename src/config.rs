use error_chain::bail;

use crate::errors::*;
use crate::generators::ActiveCellPolicy;
use crate::rooms::RoomSettings;
use crate::units::{Depth, Width};

/// Everything needed to start a generation run. Build one with `MazeConfigBuilder`.
#[derive(Debug, Clone)]
pub struct MazeConfig {
    width: Width,
    depth: Depth,
    seed: Option<u64>,
    policy: ActiveCellPolicy,
    room_settings: Vec<RoomSettings>,
}

impl MazeConfig {
    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn policy(&self) -> ActiveCellPolicy {
        self.policy
    }

    #[inline]
    pub fn room_settings(&self) -> &[RoomSettings] {
        &self.room_settings
    }
}

#[derive(Debug, Clone)]
pub struct MazeConfigBuilder {
    width: usize,
    depth: usize,
    seed: Option<u64>,
    policy: ActiveCellPolicy,
    room_settings: Vec<RoomSettings>,
}

impl Default for MazeConfigBuilder {
    fn default() -> Self {
        MazeConfigBuilder::new()
    }
}

impl MazeConfigBuilder {
    pub fn new() -> MazeConfigBuilder {
        MazeConfigBuilder {
            width: 20,
            depth: 20,
            seed: None,
            policy: ActiveCellPolicy::Newest,
            room_settings: RoomSettings::default_palette(),
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn policy(mut self, policy: ActiveCellPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn room_settings(mut self, room_settings: Vec<RoomSettings>) -> Self {
        self.room_settings = room_settings;
        self
    }

    /// Validate the options. Nothing is allocated for the grid until the config is used.
    pub fn build(self) -> Result<MazeConfig> {
        if self.width == 0 || self.depth == 0 {
            bail!(ErrorKind::InvalidDimensions(self.width, self.depth));
        }
        let max_side = i32::MAX as usize;
        let addressable = self.width.checked_mul(self.depth).is_some();
        if !addressable || self.width > max_side || self.depth > max_side {
            bail!(ErrorKind::GridTooLarge(self.width, self.depth));
        }
        if self.room_settings.is_empty() {
            bail!(ErrorKind::EmptyRoomPalette);
        }

        Ok(MazeConfig {
            width: Width(self.width),
            depth: Depth(self.depth),
            seed: self.seed,
            policy: self.policy,
            room_settings: self.room_settings,
        })
    }
}
