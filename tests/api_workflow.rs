use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use faculty_reporting::models::users::entities::UserRole;
use faculty_reporting::models::users::requests::CreateUserRequest;
use faculty_reporting::routes;
use faculty_reporting::storage::Storage;
use faculty_reporting::storage::sea_orm_storage::SeaOrmStorage;
use faculty_reporting::utils::password::hash_password;
use faculty_reporting::utils::{json_error_handler, query_error_handler};

async fn memory_storage() -> Arc<dyn Storage> {
    let storage = SeaOrmStorage::connect("sqlite::memory:", 1, 30)
        .await
        .expect("in-memory storage");
    Arc::new(storage)
}

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .configure(routes::configure_system_routes)
                .configure(routes::configure_auth_routes)
                .configure(routes::configure_courses_routes)
                .configure(routes::configure_reports_routes)
                .configure(routes::configure_prl_routes),
        )
        .await
    };
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn lecturer_report(code: &str) -> Value {
    json!({
        "facultyName": "FICT",
        "className": "BSCIT Y2",
        "weekOfReporting": "Week 6",
        "dateOfLecture": "2025-10-14",
        "courseName": "Databases",
        "courseCode": code,
        "lecturerName": "Mpho Lerotholi",
        "venue": "Room 201",
        "actualStudentsPresent": 28,
        "totalRegisteredStudents": 32,
        "topicTaught": "Normalisation",
        "stream": "IT",
        "programType": "degree"
    })
}

fn report_id(body: &Value) -> i64 {
    body["data"]["id"].as_i64().expect("report id")
}

#[actix_web::test]
async fn test_health_reports_counts() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["counts"]["reports"], 0);
    assert_eq!(body["data"]["counts"]["users"], 0);
}

#[actix_web::test]
async fn test_lecturer_report_for_assigned_course() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/courses").set_json(json!({
            "name": "Databases",
            "code": "DB101",
            "lecturer": "Mpho Lerotholi",
            "stream": "IT",
            "programType": "degree"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);

    // 同一项目类型下课程代码重复
    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/courses").set_json(json!({
            "name": "Databases II",
            "code": "DB101",
            "lecturer": "Someone Else",
            "programType": "degree"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["type"], "lecturer");
    assert_eq!(body["data"]["status"], "submitted");
    assert_eq!(body["data"]["isSubmittedToPL"], false);

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/grouped?programType=degree")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lecturer"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["student"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["prl"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["ratings"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["counts"]["total"], 1);

    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/lecturer?programType=degree")
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["courseCode"], "DB101");

    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/prl/assigned-courses?stream=IT&programType=degree")
    );
    assert_eq!(body["data"]["totalReports"], 1);
    assert_eq!(body["data"]["assignedCourses"].as_array().unwrap().len(), 1);

    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/courses/by-stream/degree")
    );
    assert_eq!(body["data"]["IT"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_feedback_on_missing_report_is_not_found() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/99999/rating-feedback")
            .set_json(json!({ "feedback": "Well structured" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Report not found");
}

#[actix_web::test]
async fn test_feedback_requires_text() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (_, created) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );
    let id = report_id(&created);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/reports/{id}/feedback"))
            .set_json(json!({ "feedback": "   " }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/reports/{id}/feedback"))
            .set_json(json!({ "feedback": "Good attendance" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "reviewed");
    assert_eq!(body["data"]["feedback"], "Good attendance");
    assert!(body["data"]["feedbackDate"].is_string());
}

#[actix_web::test]
async fn test_compile_empty_diploma_program() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/compile")
            .set_json(json!({ "programType": "diploma" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalReports"], 0);
    assert_eq!(body["data"]["lecturerReports"], 0);
    assert_eq!(body["data"]["programType"], "diploma");
}

#[actix_web::test]
async fn test_group_submit_is_idempotent_per_report() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (_, first) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );
    let (_, second) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/student")
            .set_json(json!({ "courseCode": "DB101", "studentName": "Lineo" }))
    );
    let (lecturer_id, student_id) = (report_id(&first), report_id(&second));

    // 重复ID只统计一次，非法ID与不存在的ID计为未找到
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/group/submit")
            .set_json(json!({
                "stream": "IT",
                "programType": "degree",
                "selectedReports": {
                    "student": [student_id, lecturer_id],
                    "lecturer": [lecturer_id],
                    "ratings": ["abc", 99999]
                }
            }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["submittedCount"], 2);
    assert_eq!(body["data"]["notFoundCount"], 2);
    assert_eq!(body["data"]["totalSelected"], 4);

    let (_, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/group/submit")
            .set_json(json!({
                "stream": "IT",
                "programType": "degree",
                "selectedReports": [lecturer_id.to_string()]
            }))
    );
    assert_eq!(body["data"]["submittedCount"], 0);
    assert_eq!(body["data"]["alreadySubmittedCount"], 1);

    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/pl?programType=degree")
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // 已上报的报告不能退回一线审阅
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/reports/{lecturer_id}/feedback"))
            .set_json(json!({ "feedback": "Late review" }))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/reports/{lecturer_id}/pl-feedback"))
            .set_json(json!({ "feedback": "Approved" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "pl_reviewed");
    assert_eq!(body["data"]["plFeedback"], "Approved");
}

#[actix_web::test]
async fn test_group_submit_requires_scope_and_selection() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/group/submit")
            .set_json(json!({ "programType": "degree", "selectedReports": [1] }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/group/submit")
            .set_json(json!({ "stream": "IT", "programType": "degree", "selectedReports": [] }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No reports selected for submission");
}

#[actix_web::test]
async fn test_student_channel_ratings() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/student")
            .set_json(json!({
                "type": "rating",
                "courseCode": "DB101",
                "classRating": "4",
                "lecturerRating": 5,
                "week": "Week 6"
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["type"], "rating");
    assert_eq!(body["data"]["classRating"], 4);
    assert_eq!(body["data"]["weekOfReporting"], "Week 6");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/student")
            .set_json(json!({ "isRating": true, "lecturerRating": 9 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/student")
            .set_json(json!({ "type": "lecturer", "courseCode": "DB101" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/student")
            .set_json(json!({ "courseCode": "DB101", "numberOfStudentsPresent": 20 }))
    );

    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/student?programType=degree")
    );
    let kinds: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["rating", "student"]);
}

#[actix_web::test]
async fn test_attendance_cannot_exceed_registration() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let mut report = lecturer_report("DB101");
    report["actualStudentsPresent"] = json!(40);
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(report)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_login_provisions_then_checks_password() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "thabo", "password": "secret", "role": "lecturer" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["provisioned"], true);
    assert_eq!(body["data"]["user"]["role"], "lecturer");
    assert_eq!(body["data"]["user"]["email"], "thabo@luct.edu");
    assert!(body["data"]["user"].get("passwordHash").is_none());
    assert!(body["data"]["accessToken"].is_string());

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "thabo@luct.edu", "password": "wrong" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid password");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "thabo", "password": "secret" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["provisioned"], false);
}

#[actix_web::test]
async fn test_register_rejects_duplicates() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let payload = json!({
        "username": "lineo",
        "password": "secret",
        "email": "lineo@luct.edu",
        "role": "student",
        "stream": "CS"
    });

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(payload.clone())
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["programType"], "degree");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(payload)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username or email already exists");

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "username": "nobody" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_delete_report_requires_admin_token() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (_, created) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );
    let id = report_id(&created);
    let uri = format!("/api/reports/{id}");

    let (status, _) = call_json!(app, test::TestRequest::delete().uri(&uri));
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, lecturer) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "mpho", "password": "pw", "role": "lecturer" }))
    );
    let lecturer_token = lecturer["data"]["accessToken"].as_str().unwrap().to_string();
    let (status, _) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("Authorization", format!("Bearer {lecturer_token}")))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    storage
        .create_user(CreateUserRequest {
            username: "registrar".to_string(),
            email: "registrar@luct.edu".to_string(),
            password_hash: hash_password("pw").unwrap(),
            role: UserRole::Admin,
            faculty: None,
            stream: None,
            program_type: None,
        })
        .await
        .unwrap();
    let (_, admin) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "registrar", "password": "pw" }))
    );
    let admin_token = admin["data"]["accessToken"].as_str().unwrap().to_string();
    let (status, body) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("Authorization", format!("Bearer {admin_token}")))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = call_json!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(body["data"]["counts"]["reports"], 0);
}

#[actix_web::test]
async fn test_prl_dashboard_splits_escalated_reports() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (_, first) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );
    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("NET201"))
    );
    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/group/submit")
            .set_json(json!({
                "stream": "IT",
                "programType": "degree",
                "selectedReports": [report_id(&first)]
            }))
    );

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/prl/dashboard?stream=IT&programType=degree")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["statistics"]["totalAllReports"], 2);
    assert_eq!(body["data"]["statistics"]["totalSubmittedToPL"], 1);
    assert_eq!(body["data"]["allReports"]["lecturer"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["submittedToPLReports"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_export_csv_and_downloads() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/reports/export?stream=IT&programType=degree")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"));
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Report Type,Course Code"));
    assert!(lines.next().unwrap().contains("DB101"));

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/download/lecturer/degree")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["downloadInfo"]["type"], "lecturer");
    assert_eq!(body["data"]["downloadInfo"]["totalReports"], 1);

    let (status, _) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/download/grades")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_uses_error_envelope() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/compile")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

fn assert_fields_preserved(submitted: &Value, listed: &Value) {
    for (key, value) in submitted.as_object().expect("payload object") {
        assert_eq!(&listed[key], value, "field {key} changed");
    }
}

#[actix_web::test]
async fn test_lecturer_report_fields_survive_listing() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let payload = json!({
        "facultyName": "FICT",
        "className": "BSCIT Y2",
        "weekOfReporting": "Week 7",
        "dateOfLecture": "2025-10-21",
        "courseName": "Networks",
        "courseCode": "NET201",
        "lecturerName": "Palesa Mofokeng",
        "venue": "Lab 3",
        "scheduledTime": "08:30",
        "actualTime": "08:40",
        "actualStudentsPresent": 30,
        "totalRegisteredStudents": 35,
        "topicTaught": "Subnetting",
        "learningOutcomes": "Students can split a /24",
        "challenges": "Projector failed",
        "recommendations": "Replace projector",
        "rating": 4,
        "stream": "CS",
        "programType": "degree"
    });
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(payload.clone())
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/lecturer?programType=degree")
    );
    assert_eq!(status, StatusCode::OK);
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_fields_preserved(&payload, &listed[0]);
    assert_eq!(listed[0]["type"], "lecturer");
    assert_eq!(listed[0]["status"], "submitted");

    // 其他项目类型下不可见
    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/lecturer?programType=diploma")
    );
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_student_and_rating_fields_survive_listing() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let student = json!({
        "type": "student",
        "facultyName": "FICT",
        "className": "DIT Y1",
        "weekOfReporting": "Week 2",
        "dateOfLecture": "2025-09-02",
        "courseCode": "PRG110",
        "courseName": "Programming I",
        "studentName": "Lineo Mokhethi",
        "studentNumber": "901234567",
        "actualStudentsPresent": 18,
        "totalRegisteredStudents": 20,
        "challenges": "Late start",
        "stream": "SE",
        "programType": "diploma"
    });
    let rating = json!({
        "type": "rating",
        "courseCode": "PRG110",
        "studentName": "Lineo Mokhethi",
        "classRating": 5,
        "lecturerRating": 3,
        "comments": "Needs more examples",
        "stream": "SE",
        "programType": "diploma"
    });

    for payload in [&student, &rating] {
        let (status, _) = call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/reports/student")
                .set_json(payload.clone())
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/student?programType=diploma")
    );
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_fields_preserved(&student, &listed[0]);
    assert_fields_preserved(&rating, &listed[1]);
}

#[actix_web::test]
async fn test_assigned_courses_without_courses_lists_program_reports() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    for code in ["DB101", "NET201"] {
        call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/reports/lecturer")
                .set_json(lecturer_report(code))
        );
    }

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/prl/assigned-courses?stream=IT&programType=degree")
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["assignedCourses"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["totalReports"], 2);

    let (_, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/reports/prl/assigned-courses?programType=diploma")
    );
    assert_eq!(body["data"]["totalReports"], 0);
}

#[actix_web::test]
async fn test_admin_role_is_never_self_provisioned() {
    let storage = memory_storage().await;
    let app = init_app!(storage);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": "mallory", "password": "pw", "role": "admin" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["role"], "student");

    let (_, created) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/reports/lecturer")
            .set_json(lecturer_report("DB101"))
    );
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();
    let (status, _) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/reports/{}", report_id(&created)))
            .insert_header(("Authorization", format!("Bearer {token}")))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "username": "mallory2",
                "password": "pw",
                "email": "mallory2@luct.edu",
                "role": "admin"
            }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
}
