use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Faculty).string().null())
                    .col(ColumnDef::new(Users::Stream).string().null())
                    .col(ColumnDef::new(Users::ProgramType).string().null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表（讲师以姓名字符串关联，不建外键）
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Lecturer).string().not_null())
                    .col(ColumnDef::new(Courses::Stream).string().not_null())
                    .col(ColumnDef::new(Courses::Faculty).string().not_null())
                    .col(ColumnDef::new(Courses::ProgramType).string().not_null())
                    .col(ColumnDef::new(Courses::Semester).string().null())
                    .col(ColumnDef::new(Courses::Year).string().null())
                    .col(ColumnDef::new(Courses::ScheduleDay).string().null())
                    .col(ColumnDef::new(Courses::ScheduleTime).string().null())
                    .col(ColumnDef::new(Courses::ScheduleRoom).string().null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建报告表
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::Kind).string().not_null())
                    .col(ColumnDef::new(Reports::Stream).string().not_null())
                    .col(ColumnDef::new(Reports::ProgramType).string().not_null())
                    .col(ColumnDef::new(Reports::Status).string().not_null())
                    .col(ColumnDef::new(Reports::FacultyName).string().null())
                    .col(ColumnDef::new(Reports::ClassName).string().null())
                    .col(ColumnDef::new(Reports::WeekOfReporting).string().null())
                    .col(ColumnDef::new(Reports::DateOfLecture).string().null())
                    .col(ColumnDef::new(Reports::CourseName).string().null())
                    .col(ColumnDef::new(Reports::CourseCode).string().null())
                    .col(ColumnDef::new(Reports::LecturerName).string().null())
                    .col(ColumnDef::new(Reports::StudentName).string().null())
                    .col(ColumnDef::new(Reports::StudentNumber).string().null())
                    .col(ColumnDef::new(Reports::Venue).string().null())
                    .col(ColumnDef::new(Reports::ScheduledTime).string().null())
                    .col(ColumnDef::new(Reports::ActualTime).string().null())
                    .col(ColumnDef::new(Reports::ActualStudentsPresent).integer().null())
                    .col(
                        ColumnDef::new(Reports::TotalRegisteredStudents)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Reports::TopicTaught).text().null())
                    .col(ColumnDef::new(Reports::LearningOutcomes).text().null())
                    .col(ColumnDef::new(Reports::Challenges).text().null())
                    .col(ColumnDef::new(Reports::Recommendations).text().null())
                    .col(ColumnDef::new(Reports::Issues).text().null())
                    .col(ColumnDef::new(Reports::Comments).text().null())
                    .col(ColumnDef::new(Reports::Rating).integer().null())
                    .col(ColumnDef::new(Reports::ClassRating).integer().null())
                    .col(ColumnDef::new(Reports::LecturerRating).integer().null())
                    .col(ColumnDef::new(Reports::Feedback).text().null())
                    .col(ColumnDef::new(Reports::FeedbackDate).big_integer().null())
                    .col(ColumnDef::new(Reports::PrlFeedback).text().null())
                    .col(ColumnDef::new(Reports::PrlFeedbackDate).big_integer().null())
                    .col(ColumnDef::new(Reports::PlFeedback).text().null())
                    .col(ColumnDef::new(Reports::PlFeedbackDate).big_integer().null())
                    .col(
                        ColumnDef::new(Reports::IsSubmittedToPl)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Reports::SubmittedToPlDate).big_integer().null())
                    .col(ColumnDef::new(Reports::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Reports::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_code_program_type")
                    .table(Courses::Table)
                    .col(Courses::Code)
                    .col(Courses::ProgramType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_lecturer")
                    .table(Courses::Table)
                    .col(Courses::Lecturer)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_program_type_stream")
                    .table(Reports::Table)
                    .col(Reports::ProgramType)
                    .col(Reports::Stream)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_kind")
                    .table(Reports::Table)
                    .col(Reports::Kind)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reports_course_code")
                    .table(Reports::Table)
                    .col(Reports::CourseCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Faculty,
    Stream,
    ProgramType,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Name,
    Code,
    Lecturer,
    Stream,
    Faculty,
    ProgramType,
    Semester,
    Year,
    ScheduleDay,
    ScheduleTime,
    ScheduleRoom,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Reports {
    #[sea_orm(iden = "reports")]
    Table,
    Id,
    Kind,
    Stream,
    ProgramType,
    Status,
    FacultyName,
    ClassName,
    WeekOfReporting,
    DateOfLecture,
    CourseName,
    CourseCode,
    LecturerName,
    StudentName,
    StudentNumber,
    Venue,
    ScheduledTime,
    ActualTime,
    ActualStudentsPresent,
    TotalRegisteredStudents,
    TopicTaught,
    LearningOutcomes,
    Challenges,
    Recommendations,
    Issues,
    Comments,
    Rating,
    ClassRating,
    LecturerRating,
    Feedback,
    FeedbackDate,
    PrlFeedback,
    PrlFeedbackDate,
    PlFeedback,
    PlFeedbackDate,
    IsSubmittedToPl,
    SubmittedToPlDate,
    CreatedAt,
    UpdatedAt,
}
