pub mod create_diet_plan;
