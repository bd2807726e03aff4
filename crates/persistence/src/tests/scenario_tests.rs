// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end runs of the dispatcher against SQLite.

use std::sync::Arc;

use staffdesk::{
    AssignUserToDepartment, CommandResult, CreateUser, DeleteUser, Dispatcher, GetUserById,
    ListDepartments, ListRecentUsers, ListUserAssignments, ListUsers, RemoveUserAssignment,
    SharedStore, UpdateUser, dispatcher, shared,
};
use staffdesk_domain::{DepartmentId, DomainError, UserId};

use super::{create_test_details, create_test_dispatcher, create_test_store, token};
use crate::Persistence;

async fn create_user(dispatcher: &Dispatcher, number: &str, first_name: &str) -> UserId {
    dispatcher
        .send(
            CreateUser {
                details: create_test_details(number, first_name),
            },
            &token(),
        )
        .await
        .unwrap()
        .into_value()
        .unwrap()
}

async fn create_department(store: &SharedStore<Persistence>, name: &str) -> DepartmentId {
    store.lock().await.create_department(name, None).unwrap()
}

#[tokio::test]
async fn test_assign_reassign_list_remove() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    let u1 = create_user(&dispatcher, "A100", "Ana").await;
    let d1 = create_department(&store, "IT").await;
    assert_eq!((u1, d1), (UserId::new(1), DepartmentId::new(1)));
    let assign = AssignUserToDepartment {
        user_id: u1,
        department_id: d1,
    };

    assert_eq!(
        dispatcher.send(assign, &token()).await.unwrap(),
        CommandResult::ok()
    );
    assert_eq!(
        dispatcher.send(assign, &token()).await.unwrap(),
        CommandResult::failure(DomainError::AlreadyAssigned {
            user_id: u1,
            department_id: d1,
        })
    );

    let listed = dispatcher.send(ListUserAssignments, &token()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user_id, u1);
    assert_eq!(listed[0].department_id, d1);
    assert_eq!(listed[0].user_name, "Ana Lopez");
    assert_eq!(listed[0].department_name, "IT");

    let remove = RemoveUserAssignment {
        user_id: u1,
        department_id: d1,
    };
    assert!(dispatcher.send(remove, &token()).await.unwrap().is_success());
    assert!(
        dispatcher
            .send(ListUserAssignments, &token())
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        dispatcher.send(remove, &token()).await.unwrap().messages(),
        vec![String::from(
            "Assignment of user 1 to department 1 not found"
        )]
    );
}

#[tokio::test]
async fn test_soft_delete_keeps_user_and_assignment_rows() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    let u1 = create_user(&dispatcher, "A100", "Ana").await;
    let d1 = create_department(&store, "IT").await;
    dispatcher
        .send(
            AssignUserToDepartment {
                user_id: u1,
                department_id: d1,
            },
            &token(),
        )
        .await
        .unwrap();

    let deleted = dispatcher
        .send(DeleteUser { user_id: u1 }, &token())
        .await
        .unwrap();

    assert!(deleted.is_success());
    assert!(
        dispatcher
            .send(GetUserById { user_id: u1 }, &token())
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        dispatcher
            .send(ListUsers, &token())
            .await
            .unwrap()
            .iter()
            .all(|u| u.id != u1)
    );
    assert!(
        dispatcher
            .send(ListUserAssignments, &token())
            .await
            .unwrap()
            .is_empty()
    );

    let mut persistence = store.lock().await;
    assert!(persistence.assignment_exists(u1, d1).unwrap());
    let row = persistence.find_user(u1).unwrap().unwrap();
    assert!(!row.is_active);
}

#[tokio::test]
async fn test_create_user_accepts_reused_identification_number() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);

    let first = create_user(&dispatcher, "A100", "Ana").await;
    let second = create_user(&dispatcher, "A100", "Bruno").await;

    assert_ne!(first, second);
    assert_eq!(dispatcher.send(ListUsers, &token()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_collision_rules() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    let ana = create_user(&dispatcher, "A100", "Ana").await;
    let bruno = create_user(&dispatcher, "B200", "Bruno").await;
    let carla = create_user(&dispatcher, "C300", "Carla").await;
    dispatcher
        .send(DeleteUser { user_id: carla }, &token())
        .await
        .unwrap();

    let unchanged = dispatcher
        .send(
            UpdateUser {
                user_id: ana,
                details: create_test_details("A100", "Ana"),
            },
            &token(),
        )
        .await
        .unwrap();
    let clash_active = dispatcher
        .send(
            UpdateUser {
                user_id: ana,
                details: create_test_details("B200", "Ana"),
            },
            &token(),
        )
        .await
        .unwrap();
    let clash_inactive = dispatcher
        .send(
            UpdateUser {
                user_id: bruno,
                details: create_test_details("C300", "Bruno"),
            },
            &token(),
        )
        .await
        .unwrap();

    assert!(unchanged.is_success());
    assert_eq!(
        clash_active.messages(),
        vec![String::from(
            "A user with identification number 'B200' already exists"
        )]
    );
    assert!(clash_inactive.errors()[0].is_conflict());
}

#[tokio::test]
async fn test_update_changes_fields() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    let ana = create_user(&dispatcher, "A100", "Ana").await;

    dispatcher
        .send(
            UpdateUser {
                user_id: ana,
                details: create_test_details("A101", "Anabel"),
            },
            &token(),
        )
        .await
        .unwrap();

    let user = dispatcher
        .send(GetUserById { user_id: ana }, &token())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.identification_number, "A101");
    assert_eq!(user.first_name, "Anabel");
    assert_eq!(user.email, "anabel@example.com");
}

#[tokio::test]
async fn test_recent_users_are_newest_ten() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    for n in 1..=12 {
        create_user(&dispatcher, &format!("N{n}"), &format!("User{n}")).await;
    }
    dispatcher
        .send(
            DeleteUser {
                user_id: UserId::new(12),
            },
            &token(),
        )
        .await
        .unwrap();

    let recent = dispatcher.send(ListRecentUsers, &token()).await.unwrap();

    let ids: Vec<i64> = recent.iter().map(|u| u.id.value()).collect();
    assert_eq!(ids, (2..=11).rev().collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_users_sorted_by_name() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    create_user(&dispatcher, "A1", "Marta").await;
    create_user(&dispatcher, "A2", "Ana").await;
    create_user(&dispatcher, "A3", "Bruno").await;

    let users = dispatcher.send(ListUsers, &token()).await.unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.first_name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bruno", "Marta"]);
}

#[tokio::test]
async fn test_closed_department_rules() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    let ana = create_user(&dispatcher, "A100", "Ana").await;
    let it = create_department(&store, "IT").await;
    let legal = create_department(&store, "Legal").await;
    dispatcher
        .send(
            AssignUserToDepartment {
                user_id: ana,
                department_id: it,
            },
            &token(),
        )
        .await
        .unwrap();
    {
        let mut persistence = store.lock().await;
        persistence.set_department_active(it, false).unwrap();
        persistence.set_department_active(legal, false).unwrap();
    }

    let departments = dispatcher.send(ListDepartments, &token()).await.unwrap();
    let assignments = dispatcher.send(ListUserAssignments, &token()).await.unwrap();
    let assign_closed = dispatcher
        .send(
            AssignUserToDepartment {
                user_id: ana,
                department_id: legal,
            },
            &token(),
        )
        .await
        .unwrap();

    assert!(departments.is_empty());
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].department_id, it);
    assert_eq!(
        assign_closed.errors(),
        [DomainError::DepartmentNotFound {
            department_id: legal,
        }]
    );
}

#[tokio::test]
async fn test_concurrent_assigns_store_one_row() {
    let store = create_test_store();
    let dispatcher = create_test_dispatcher(&store);
    let ana = create_user(&dispatcher, "A100", "Ana").await;
    let it = create_department(&store, "IT").await;

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let dispatcher = dispatcher.clone();
        tasks.push(tokio::spawn(async move {
            dispatcher
                .send(
                    AssignUserToDepartment {
                        user_id: ana,
                        department_id: it,
                    },
                    &token(),
                )
                .await
                .unwrap()
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for task in tasks {
        let outcome = task.await.unwrap();
        if outcome.is_success() {
            successes += 1;
        } else if outcome.errors()[0].is_conflict() {
            conflicts += 1;
        }
    }

    assert_eq!((successes, conflicts), (1, 9));
    assert_eq!(
        dispatcher
            .send(ListUserAssignments, &token())
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_separate_connections_store_one_row() {
    let path = std::env::temp_dir().join(format!("staffdesk_race_{}.db", std::process::id()));
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }

    let (ana, it) = {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        let it = persistence.create_department("IT", None).unwrap();
        let setup = dispatcher(shared(persistence)).unwrap();
        (create_user(&setup, "A100", "Ana").await, it)
    };

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let store = shared(Persistence::new_with_file(&path).unwrap());
        let racer = dispatcher(Arc::clone(&store)).unwrap();
        tasks.push(tokio::spawn(async move {
            racer
                .send(
                    AssignUserToDepartment {
                        user_id: ana,
                        department_id: it,
                    },
                    &token(),
                )
                .await
                .unwrap()
        }));
    }

    let mut successes = 0;
    for task in tasks {
        let outcome = task.await.unwrap();
        if outcome.is_success() {
            successes += 1;
        } else {
            assert!(outcome.errors()[0].is_conflict());
        }
    }

    assert_eq!(successes, 1);
    let mut check = Persistence::new_with_file(&path).unwrap();
    assert!(check.assignment_exists(ana, it).unwrap());
}
