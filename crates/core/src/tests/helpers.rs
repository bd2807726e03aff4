// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffdesk_domain::{
    Assignment, Department, DepartmentId, NewUser, User, UserDetails, UserId,
};
use tokio_util::sync::CancellationToken;

use crate::{
    AssignmentRecord, Dispatcher, Repository, SharedStore, Store, StoreError, UserOrder,
    dispatcher, shared,
};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    users: Vec<User>,
    departments: Vec<Department>,
    assignments: Vec<Assignment>,
}

/// A store that keeps everything in vectors.
///
/// Each transaction works on a copy of the state and swaps it in on `Ok`, so
/// an `Err` from the closure leaves nothing behind.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: MemoryState,
    /// Makes `find_assignment` miss, so a duplicate pair only surfaces as a
    /// unique violation from `insert_assignment`.
    pub hide_assignments: bool,
    /// Cancelled from inside `find_active_user`, after the store lock is
    /// taken and before any write.
    pub cancel_on_lookup: Option<CancellationToken>,
}

impl MemoryStore {
    pub fn add_department(&mut self, name: &str, is_active: bool) -> DepartmentId {
        let department_id = DepartmentId::new(
            i64::try_from(self.state.departments.len()).unwrap() + 1,
        );
        self.state.departments.push(Department {
            department_id,
            name: name.to_string(),
            description: None,
            is_active,
        });
        department_id
    }

    pub fn set_department_active(&mut self, department_id: DepartmentId, is_active: bool) {
        for department in &mut self.state.departments {
            if department.department_id == department_id {
                department.is_active = is_active;
            }
        }
    }

    pub fn user(&self, user_id: UserId) -> Option<User> {
        self.state
            .users
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
    }

    pub fn user_count(&self) -> usize {
        self.state.users.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.state.assignments.len()
    }

    fn run<T, F>(&mut self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>,
    {
        let mut scratch: MemoryState = self.state.clone();
        let value: T = {
            let repo: &mut dyn Repository = &mut MemoryRepository {
                state: &mut scratch,
                hide_assignments: self.hide_assignments,
                cancel_on_lookup: self.cancel_on_lookup.as_ref(),
            };
            work(repo)?
        };
        self.state = scratch;
        Ok(value)
    }
}

impl Store for MemoryStore {
    fn read<T, F>(&mut self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>,
    {
        self.run(work)
    }

    fn write<T, F>(&mut self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>,
    {
        self.run(work)
    }
}

struct MemoryRepository<'a> {
    state: &'a mut MemoryState,
    hide_assignments: bool,
    cancel_on_lookup: Option<&'a CancellationToken>,
}

impl Repository for MemoryRepository<'_> {
    fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self
            .state
            .users
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned())
    }

    fn find_active_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError> {
        if let Some(cancel) = self.cancel_on_lookup {
            cancel.cancel();
        }
        Ok(self.find_user(user_id)?.filter(|u| u.is_active))
    }

    fn find_user_by_identification_number(
        &mut self,
        identification_number: &str,
        excluding: Option<UserId>,
    ) -> Result<Option<User>, StoreError> {
        Ok(self
            .state
            .users
            .iter()
            .filter(|u| Some(u.user_id) != excluding)
            .find(|u| u.identification_number == identification_number)
            .cloned())
    }

    fn list_active_users(
        &mut self,
        order: UserOrder,
        limit: Option<u32>,
    ) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self
            .state
            .users
            .iter()
            .filter(|u| u.is_active)
            .cloned()
            .collect();
        match order {
            UserOrder::ByName => users.sort_by(|a, b| {
                (&a.first_name, &a.last_name, a.user_id).cmp(&(
                    &b.first_name,
                    &b.last_name,
                    b.user_id,
                ))
            }),
            UserOrder::NewestFirst => {
                users.sort_by(|a, b| (b.created_at, b.user_id).cmp(&(a.created_at, a.user_id)));
            }
        }
        if let Some(limit) = limit {
            users.truncate(usize::try_from(limit).unwrap());
        }
        Ok(users)
    }

    fn insert_user(&mut self, user: &NewUser) -> Result<UserId, StoreError> {
        let user_id = UserId::new(i64::try_from(self.state.users.len()).unwrap() + 1);
        let details: UserDetails = user.details.clone();
        self.state.users.push(User {
            user_id,
            identification_number: details.identification_number,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone: details.phone,
            created_at: user.created_at,
            is_active: true,
        });
        Ok(user_id)
    }

    fn update_user(&mut self, user: &User) -> Result<(), StoreError> {
        let slot = self
            .state
            .users
            .iter_mut()
            .find(|u| u.user_id == user.user_id)
            .ok_or_else(|| StoreError::Backend(format!("no row for user {}", user.user_id)))?;
        *slot = user.clone();
        Ok(())
    }

    fn find_active_department(
        &mut self,
        department_id: DepartmentId,
    ) -> Result<Option<Department>, StoreError> {
        Ok(self
            .state
            .departments
            .iter()
            .find(|d| d.department_id == department_id && d.is_active)
            .cloned())
    }

    fn list_active_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        let mut departments: Vec<Department> = self
            .state
            .departments
            .iter()
            .filter(|d| d.is_active)
            .cloned()
            .collect();
        departments.sort_by_key(|d| d.department_id);
        Ok(departments)
    }

    fn find_assignment(
        &mut self,
        user_id: UserId,
        department_id: DepartmentId,
    ) -> Result<Option<Assignment>, StoreError> {
        if self.hide_assignments {
            return Ok(None);
        }
        Ok(self
            .state
            .assignments
            .iter()
            .find(|a| a.user_id == user_id && a.department_id == department_id)
            .cloned())
    }

    fn insert_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        if self.state.assignments.iter().any(|a| {
            a.user_id == assignment.user_id && a.department_id == assignment.department_id
        }) {
            return Err(StoreError::UniqueViolation {
                constraint: String::from("user_departments.user_id, user_departments.department_id"),
            });
        }
        self.state.assignments.push(assignment.clone());
        Ok(())
    }

    fn delete_assignment(
        &mut self,
        user_id: UserId,
        department_id: DepartmentId,
    ) -> Result<bool, StoreError> {
        let before = self.state.assignments.len();
        self.state
            .assignments
            .retain(|a| !(a.user_id == user_id && a.department_id == department_id));
        Ok(self.state.assignments.len() != before)
    }

    fn list_assignments_of_active_users(&mut self) -> Result<Vec<AssignmentRecord>, StoreError> {
        let mut records: Vec<AssignmentRecord> = Vec::new();
        for assignment in &self.state.assignments {
            let user = self
                .state
                .users
                .iter()
                .find(|u| u.user_id == assignment.user_id && u.is_active);
            let department = self
                .state
                .departments
                .iter()
                .find(|d| d.department_id == assignment.department_id);
            if let (Some(user), Some(department)) = (user, department) {
                records.push(AssignmentRecord {
                    assignment: assignment.clone(),
                    user: user.clone(),
                    department: department.clone(),
                });
            }
        }
        records.sort_by_key(|r| (r.assignment.user_id, r.assignment.department_id));
        Ok(records)
    }
}

/// A store that fails every transaction.
pub struct BrokenStore;

impl Store for BrokenStore {
    fn read<T, F>(&mut self, _work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>,
    {
        Err(StoreError::Backend(String::from("disk I/O error")))
    }

    fn write<T, F>(&mut self, _work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn Repository) -> Result<T, StoreError>,
    {
        Err(StoreError::Backend(String::from("disk I/O error")))
    }
}

pub fn create_test_details(
    identification_number: &str,
    first_name: &str,
    last_name: &str,
) -> UserDetails {
    UserDetails {
        identification_number: identification_number.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: String::from("555-0100"),
    }
}

pub fn create_test_store() -> SharedStore<MemoryStore> {
    shared(MemoryStore::default())
}

pub fn create_test_dispatcher(store: &SharedStore<MemoryStore>) -> Dispatcher {
    dispatcher(std::sync::Arc::clone(store)).unwrap()
}

pub fn token() -> CancellationToken {
    CancellationToken::new()
}
