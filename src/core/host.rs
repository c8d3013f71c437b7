use super::coordinator::TickSnapshot;
use super::model::{Entity, WorldFlags};
use super::varbits::{Varbit, VarbitState};

/// What the engine needs from the game client.
pub trait HostClient {
    fn world_flags(&self) -> WorldFlags;

    /// Raw varbit value by host id
    fn varbit(&self, id: u32) -> i32;

    /// None while logged out or loading
    fn local_actor(&self) -> Option<Entity>;

    /// Visible players in host order, local actor included
    fn visible_entities(&self) -> Vec<Entity>;

    /// Text of the wilderness level widget, if it is shown
    fn wilderness_depth_label(&self) -> Option<String>;

    /// Deliver a warning. Fire and forget.
    fn notify(&mut self, message: &str);

    /// Read everything a tick needs in one go.
    fn snapshot(&self) -> Option<TickSnapshot> {
        let local_actor = self.local_actor()?;

        let mut varbits = VarbitState::new();
        for varbit in Varbit::all() {
            varbits.set(*varbit, varbit.from_host(self.varbit(varbit.host_id())));
        }

        Some(TickSnapshot {
            world_flags: self.world_flags(),
            varbits,
            local_actor,
            entities: self.visible_entities(),
            wilderness_depth_label: self.wilderness_depth_label(),
        })
    }
}
