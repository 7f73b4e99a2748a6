//! MILP model construction

use super::{AssignmentError, AssignmentProblem};
use busplan_core::{Shift, SHIFT_COUNT};
use good_lp::{constraint, variable, variables, Constraint, Expression, ProblemVariables, Variable};

/// A built, unsolved assignment model.
///
/// Holds the `good_lp` variables, objective and constraints. Assignment
/// variables are laid out route-major: `(route, shift, bus type)`. Usage
/// variables are laid out `(shift, bus type)`.
pub struct AssignmentModel {
    pub(super) vars: ProblemVariables,
    pub(super) objective: Expression,
    pub(super) constraints: Vec<Constraint>,
    pub(super) assign: Vec<Variable>,
    pub(super) usage: Vec<Variable>,
    num_routes: usize,
    num_types: usize,
}

impl AssignmentModel {
    /// Validate `problem` and build its MILP.
    ///
    /// Demand rows are only emitted for (route, shift) pairs with positive
    /// demand; the others are already satisfied by the non-negativity bounds.
    pub fn build(problem: &AssignmentProblem) -> Result<Self, AssignmentError> {
        problem.validate()?;
        if let Some((route, shift)) = problem.unservable_demand() {
            return Err(AssignmentError::Infeasible(format!(
                "route {} {} has demand {} but no trips",
                route.id,
                shift,
                route.demand(shift)
            )));
        }

        let num_routes = problem.num_routes();
        let num_types = problem.num_bus_types();
        let bus_types = problem.fleet.types();

        let mut vars = variables!();
        let mut assign = Vec::with_capacity(num_routes * SHIFT_COUNT * num_types);
        for _ in 0..num_routes * SHIFT_COUNT * num_types {
            assign.push(vars.add(variable().integer().min(0)));
        }
        let mut usage = Vec::with_capacity(SHIFT_COUNT * num_types);
        for _ in 0..SHIFT_COUNT * num_types {
            usage.push(vars.add(variable().integer().min(0)));
        }

        let mut model = Self {
            vars,
            objective: Expression::with_capacity(assign.len()),
            constraints: Vec::new(),
            assign,
            usage,
            num_routes,
            num_types,
        };

        for (i, route) in problem.routes.iter().enumerate() {
            for shift in Shift::all() {
                let trips = route.trips(shift);
                let mut seats = Expression::with_capacity(num_types);
                for (t, bus) in bus_types.iter().enumerate() {
                    let x = model.assign[model.assign_index(i, shift, t)];
                    model.objective.add_mul(bus.cost * trips, x);
                    seats.add_mul(bus.seats_for_trips(trips), x);
                }
                let demand = route.demand(shift);
                if demand > 0.0 {
                    model.constraints.push(constraint!(seats >= demand));
                }
            }
        }

        for shift in Shift::all() {
            for (t, bus) in bus_types.iter().enumerate() {
                let u = model.usage[model.usage_index(shift, t)];
                let mut assigned = Expression::with_capacity(num_routes);
                for i in 0..num_routes {
                    assigned.add_mul(1.0, model.assign[model.assign_index(i, shift, t)]);
                }
                let cap = f64::from(bus.fleet_size);
                model.constraints.push(constraint!(u == assigned));
                model.constraints.push(constraint!(u <= cap));
            }
        }

        Ok(model)
    }

    /// Position of `x[route, shift, bus_type]` among the assignment variables.
    pub fn assign_index(&self, route: usize, shift: Shift, bus_type: usize) -> usize {
        (route * SHIFT_COUNT + shift.index()) * self.num_types + bus_type
    }

    /// Position of `u[shift, bus_type]` among the usage variables.
    pub fn usage_index(&self, shift: Shift, bus_type: usize) -> usize {
        shift.index() * self.num_types + bus_type
    }

    pub fn num_routes(&self) -> usize {
        self.num_routes
    }

    pub fn num_bus_types(&self) -> usize {
        self.num_types
    }

    pub fn num_variables(&self) -> usize {
        self.assign.len() + self.usage.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::AssignmentProblemBuilder;

    #[test]
    fn test_model_dimensions() {
        let problem = AssignmentProblemBuilder::with_default_fleet()
            .route("1", [60.0, 90.0, 0.0, 30.0], [1.0; 4])
            .route("2", [10.0, 10.0, 10.0, 10.0], [2.0; 4])
            .build();
        let model = AssignmentModel::build(&problem).unwrap();

        // 2 routes x 4 shifts x 2 types + 4 shifts x 2 types
        assert_eq!(model.num_variables(), 16 + 8);
        // 7 positive-demand rows + (aggregation + cap) per shift and type
        assert_eq!(model.num_constraints(), 7 + 2 * 8);
    }

    #[test]
    fn test_indices_are_disjoint_and_dense() {
        let problem = AssignmentProblemBuilder::with_default_fleet()
            .route("1", [1.0; 4], [1.0; 4])
            .route("2", [1.0; 4], [1.0; 4])
            .route("3", [1.0; 4], [1.0; 4])
            .build();
        let model = AssignmentModel::build(&problem).unwrap();

        let mut seen = vec![false; model.assign.len()];
        for r in 0..model.num_routes() {
            for s in Shift::all() {
                for t in 0..model.num_bus_types() {
                    let idx = model.assign_index(r, s, t);
                    assert!(!seen[idx]);
                    seen[idx] = true;
                }
            }
        }
        assert!(seen.iter().all(|&v| v));
        assert_eq!(model.usage_index(Shift::new(3).unwrap(), 1), model.usage.len() - 1);
    }

    #[test]
    fn test_build_rejects_invalid_problem() {
        let problem = AssignmentProblemBuilder::with_default_fleet().build();
        assert!(matches!(
            AssignmentModel::build(&problem),
            Err(AssignmentError::ModelInvalid(_))
        ));
    }

    #[test]
    fn test_build_rejects_demand_without_trips() {
        let problem = AssignmentProblemBuilder::with_default_fleet()
            .route("5", [0.0, 40.0, 0.0, 0.0], [1.0, 0.0, 1.0, 1.0])
            .build();
        let err = AssignmentModel::build(&problem).err().unwrap();
        assert!(matches!(err, AssignmentError::Infeasible(_)));
        assert!(err.to_string().contains("route 5 Shift 2"));
    }
}
