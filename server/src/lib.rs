mod reducers {
    pub mod body;
    pub(crate) mod drag_tick;
    pub mod platform;
}
pub mod schema;
pub mod types;
mod world;

use crate::schema::*;
use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    ctx.db.drag_settings().id().delete(1);
    ctx.db
        .drag_settings()
        .insert(DragSettingsRow::from_settings(1, &drag::DragSettings::default()));
    world::seed_static_world(ctx);
    reducers::drag_tick::init(ctx);
}
