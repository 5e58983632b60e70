mod intersection_properties;
mod intersection_scenarios;
mod random_shapes;
mod shape_parameters;
mod shape_scaling;
mod sweep_contact;
