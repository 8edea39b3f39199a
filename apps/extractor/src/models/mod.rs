pub mod skill_matrix;
