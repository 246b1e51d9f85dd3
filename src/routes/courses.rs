use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::common::{ProgramQuery, ScopeQuery};
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::{SafeIDI64, SafeProgramType};

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn courses_by_stream(
    req: HttpRequest,
    program_type: SafeProgramType,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .courses_by_stream(&req, program_type.0, query.into_inner())
        .await
}

pub async fn lecturer_courses(
    req: HttpRequest,
    lecturer: web::Path<String>,
    query: web::Query<ProgramQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .lecturer_courses(&req, lecturer.into_inner(), query.into_inner().into())
        .await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .route(
                "/by-stream/{program_type}",
                web::get().to(courses_by_stream),
            )
            .route("/lecturer/{lecturer_name}", web::get().to(lecturer_courses))
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update_course)
                            // 仅 PL 与管理员可修改课程
                            .wrap(middlewares::RequireRole::new_any(
                                UserRole::course_admin_roles(),
                            ))
                            .wrap(middlewares::RequireJWT),
                    )
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireRole::new_any(
                                UserRole::course_admin_roles(),
                            ))
                            .wrap(middlewares::RequireJWT),
                    ),
            ),
    );
}
