mod end_to_end;
mod grid_planner;
mod obj_loader;
mod swept_level_set;
