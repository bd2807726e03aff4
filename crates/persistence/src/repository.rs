// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `Repository` over a connection that is already inside a transaction.

use diesel::SqliteConnection;
use staffdesk::{AssignmentRecord, Repository, StoreError, UserOrder};
use staffdesk_domain::{Assignment, Department, DepartmentId, NewUser, User, UserId};

use crate::{mutations, queries};

pub struct DieselRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> DieselRepository<'a> {
    pub const fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }
}

impl Repository for DieselRepository<'_> {
    fn find_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError> {
        Ok(queries::users::find_user(self.conn, user_id)?)
    }

    fn find_active_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError> {
        Ok(queries::users::find_active_user(self.conn, user_id)?)
    }

    fn find_user_by_identification_number(
        &mut self,
        identification_number: &str,
        excluding: Option<UserId>,
    ) -> Result<Option<User>, StoreError> {
        Ok(queries::users::find_user_by_identification_number(
            self.conn,
            identification_number,
            excluding,
        )?)
    }

    fn list_active_users(
        &mut self,
        order: UserOrder,
        limit: Option<u32>,
    ) -> Result<Vec<User>, StoreError> {
        Ok(queries::users::list_active_users(self.conn, order, limit)?)
    }

    fn insert_user(&mut self, user: &NewUser) -> Result<UserId, StoreError> {
        Ok(mutations::users::insert_user(self.conn, user)?)
    }

    fn update_user(&mut self, user: &User) -> Result<(), StoreError> {
        Ok(mutations::users::update_user(self.conn, user)?)
    }

    fn find_active_department(
        &mut self,
        department_id: DepartmentId,
    ) -> Result<Option<Department>, StoreError> {
        Ok(queries::departments::find_active_department(
            self.conn,
            department_id,
        )?)
    }

    fn list_active_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        Ok(queries::departments::list_active_departments(self.conn)?)
    }

    fn find_assignment(
        &mut self,
        user_id: UserId,
        department_id: DepartmentId,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(queries::assignments::find_assignment(
            self.conn,
            user_id,
            department_id,
        )?)
    }

    fn insert_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        Ok(mutations::assignments::insert_assignment(
            self.conn, assignment,
        )?)
    }

    fn delete_assignment(
        &mut self,
        user_id: UserId,
        department_id: DepartmentId,
    ) -> Result<bool, StoreError> {
        Ok(mutations::assignments::delete_assignment(
            self.conn,
            user_id,
            department_id,
        )?)
    }

    fn list_assignments_of_active_users(&mut self) -> Result<Vec<AssignmentRecord>, StoreError> {
        Ok(queries::assignments::list_assignments_of_active_users(
            self.conn,
        )?)
    }
}
