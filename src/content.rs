//! Prepared report content.
//!
//! The section content map: immutable prose baked into the binary, keyed by
//! section name. This is data, not logic; the fill and dump operations take
//! it as plain string slices.

/// The project title substituted for the template placeholder.
pub const PROJECT_TITLE: &str = "Real Estate Management System";

/// Full placeholder form used on the template title page.
pub const TITLE_PLACEHOLDER_FULL: &str = "XXXX (Project Title)";

/// Short placeholder form that appears in running heads.
pub const TITLE_PLACEHOLDER_SHORT: &str = "Project Title";

/// A prepared report section: the name used to locate its heading in the
/// template, the banner heading used in the text report, and the content.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Name matched (case-insensitively) against template headings.
    pub name: &'static str,
    /// Upper-case heading used in the dumped text report.
    pub report_heading: &'static str,
    /// Prepared prose for the section body.
    pub content: &'static str,
}

/// All prepared sections in report order.
pub fn report_sections() -> &'static [Section] {
    SECTIONS
}

/// Look up a section's content by name (case-insensitive).
pub fn section_content(name: &str) -> Option<&'static str> {
    SECTIONS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .map(|s| s.content)
}

static SECTIONS: &[Section] = &[
    Section {
        name: "Abstract",
        report_heading: "ABSTRACT",
        content: ABSTRACT,
    },
    Section {
        name: "Introduction",
        report_heading: "INTRODUCTION",
        content: INTRODUCTION,
    },
    Section {
        name: "Technology",
        report_heading: "TECHNOLOGY USED AND IMPLEMENTATION STRATEGY",
        content: TECHNOLOGY,
    },
    Section {
        name: "Implementation Snapshot",
        report_heading: "IMPLEMENTATION SNAPSHOT",
        content: IMPLEMENTATION_SNAPSHOT,
    },
    Section {
        name: "Conclusion",
        report_heading: "CONCLUSION",
        content: CONCLUSION,
    },
    Section {
        name: "References",
        report_heading: "REFERENCES",
        content: REFERENCES,
    },
];

const ABSTRACT: &str = r#"The Real Estate Management System is a comprehensive web-based application developed using ASP.NET Core MVC framework and Entity Framework Core. The system provides an efficient platform for managing real estate properties, facilitating property listings, bookings, and inquiries. It enables property owners to list their properties with detailed information including images, location details, pricing, and amenities. Users can search and filter properties based on various criteria such as property type, location, price range, and listing type (sale/rent). The system incorporates role-based access control with separate interfaces for administrators and regular users. Administrators can manage all properties, users, bookings, and inquiries through a centralized dashboard. The system utilizes SQL Server as the database backend, ensuring data integrity and efficient data management. With features like property viewing history, booking management, and inquiry handling, the system streamlines the real estate business process, making it easier for both property owners and potential buyers/renters to interact and conduct transactions."#;

const INTRODUCTION: &str = r#"1.1 Background

Real estate management has traditionally been a complex process involving numerous intermediaries, paper-based documentation, and manual tracking of properties, clients, and transactions. The digital transformation of the real estate industry has become imperative to meet the growing demands of modern property buyers, sellers, and renters. With the increasing use of the internet and mobile devices, customers expect seamless access to property information, easy search capabilities, and efficient communication channels.

The need for an automated real estate management system arises from several challenges:
• Manual record keeping leads to errors and inefficiencies
• Difficulty in managing multiple properties across different locations
• Lack of centralized platform for property listings and inquiries
• Time-consuming processes for booking property viewings
• Challenges in tracking customer inquiries and responses

1.2 Problem Statement

Traditional real estate operations face significant challenges in managing property listings, handling customer inquiries, scheduling property viewings, and maintaining accurate records. The absence of a centralized digital platform results in:
• Inefficient property search and discovery process
• Poor communication between property owners and potential buyers/renters
• Lack of proper tracking mechanisms for bookings and inquiries
• Difficulty in managing property data and images
• Limited analytics and reporting capabilities

1.3 Objectives

The primary objectives of this Real Estate Management System project are:
• To develop a web-based platform for efficient property management
• To provide an intuitive interface for property search and filtering
• To enable seamless booking of property viewings
• To facilitate communication through inquiry management
• To implement role-based access control for administrators and users
• To ensure secure data management and user authentication
• To provide comprehensive administrative tools for property and user management
• To create a responsive and user-friendly interface

1.4 Scope

The system encompasses the following features:
• User registration and authentication system
• Property listing and management
• Advanced property search and filtering
• Property booking system for viewing appointments
• Inquiry management for customer queries
• Administrative dashboard with analytics
• User profile management
• Image upload and management for properties
• City-based property organization"#;

const TECHNOLOGY: &str = r#"2.1 Technology Stack

The Real Estate Management System is built using a modern technology stack:

2.1.1 Backend Technologies
• ASP.NET Core MVC 8.0: A powerful web framework for building dynamic web applications using the Model-View-Controller pattern. It provides excellent performance, cross-platform support, and extensive libraries for web development.

• Entity Framework Core 9.0: Modern ORM (Object-Relational Mapping) framework that simplifies database operations. It enables developers to work with databases using object-oriented programming concepts, eliminating the need for writing raw SQL queries.

• SQL Server: Enterprise-grade relational database management system providing robust data storage, security, and performance. It ensures data integrity through ACID properties and supports complex queries and transactions.

• C# Programming Language: Object-oriented programming language with strong typing, garbage collection, and extensive framework support. It provides excellent performance and developer productivity.

• BCrypt.Net 4.0.3: Industry-standard library for secure password hashing. It uses the bcrypt algorithm to hash passwords, making them resistant to brute-force attacks.

2.1.2 Frontend Technologies
• Razor Views: Server-side templating engine that combines HTML with C# code to generate dynamic web pages. It provides IntelliSense support and strong typing.

• Bootstrap 5: Modern CSS framework providing responsive grid system, components, and utilities. It ensures the application looks professional and works seamlessly across all device sizes.

• jQuery: JavaScript library simplifying DOM manipulation, event handling, and AJAX operations. It provides cross-browser compatibility and simplifies client-side programming.

• CSS3: Advanced styling capabilities including animations, transitions, and responsive design features for enhanced user experience.

• JavaScript: Client-side scripting language for creating interactive and dynamic user interfaces.

2.1.3 Development Tools
• Visual Studio 2022: Integrated Development Environment providing comprehensive tools for coding, debugging, and testing applications.

• SQL Server Management Studio: Database administration tool for managing database schema, data, and performing queries.

• Git: Distributed version control system for tracking code changes and collaboration.

2.2 System Architecture

The system follows a three-tier architecture pattern:

2.2.1 Presentation Layer
The presentation layer consists of Razor Views and Controllers:
• Controllers handle HTTP requests and responses
• Views render the user interface
• ViewModels transfer data between controllers and views
• Client-side scripts enhance interactivity

2.2.2 Business Logic Layer
The business logic layer processes application rules:
• Controller actions implement business logic
• Service classes encapsulate reusable business operations
• Validation ensures data integrity
• Session management handles user state

2.2.3 Data Access Layer
The data access layer manages database operations:
• Entity Framework Core DbContext manages database connections
• Models represent database entities
• Migrations manage database schema changes
• LINQ queries retrieve and manipulate data

2.3 Database Design

The system uses the following main entities:

2.3.1 User Entity
Stores user information including:
• User identification and authentication data
• Profile information (name, email, phone, address)
• Role-based access control (Admin/User)
• Account status and timestamps

2.3.2 Property Entity
Contains comprehensive property details:
• Basic information (title, description, type)
• Location details (address, city, state, zip code)
• Pricing and listing type (sale/rent)
• Physical attributes (bedrooms, bathrooms, square feet)
• Features and amenities
• Image paths for property photos
• Status and visibility flags

2.3.3 Booking Entity
Manages property viewing appointments:
• Booking date and time
• User and property associations
• Status tracking (Pending, Confirmed, Cancelled, Completed)
• Admin notes and messages

2.3.4 Inquiry Entity
Handles customer communications:
• Inquiry details and messages
• User and property associations
• Status tracking (New, Read, Replied)
• Admin responses and timestamps

2.3.5 City Entity
Organizes properties by location:
• City and state information
• Property count statistics
• City images for display
• Active status flag

2.4 Implementation Strategy

2.4.1 Development Methodology
The project follows an iterative development approach:

Phase 1 - Requirements Analysis:
• Identified core features and user needs
• Defined user roles and permissions
• Outlined system requirements
• Created initial project structure

Phase 2 - Database Design:
• Created Entity Framework models
• Defined relationships between entities
• Implemented database migrations
• Seeded initial data

Phase 3 - Backend Development:
• Implemented authentication and authorization
• Developed controllers for all modules
• Created service classes for business logic
• Implemented data validation

Phase 4 - Frontend Development:
• Designed responsive layouts
• Created user-friendly interfaces
• Implemented search and filtering
• Added interactive features

Phase 5 - Testing and Refinement:
• Performed functional testing
• Fixed bugs and issues
• Optimized performance
• Enhanced user experience

2.4.2 Security Implementation
• Password Hashing: All passwords are hashed using BCrypt with salt, ensuring they cannot be reversed even if the database is compromised.

• Session Management: Secure session-based authentication tracks user login state without storing sensitive data on the client side.

• Role-Based Authorization: Different access levels for administrators and regular users, ensuring users can only access appropriate features.

• Input Validation: Server-side and client-side validation prevents SQL injection, XSS attacks, and data corruption.

• File Upload Security: Validated file types and sizes for property images to prevent malicious uploads.

2.4.3 Key Features Implementation

Property Search and Filtering:
• Implemented LINQ queries for efficient database searches
• Multiple filter criteria (type, city, price, listing type)
• Dynamic query building based on user selections
• Optimized database queries for performance

Image Management:
• Secure file upload handling
• Image validation and processing
• Unique file naming to prevent conflicts
• Multiple images per property support

Booking System:
• Calendar-based date selection
• Time slot management
• Booking status workflow
• Admin approval system

Inquiry Management:
• User inquiry submission
• Admin response system
• Status tracking
• Email notification capability (future enhancement)

Dashboard Analytics:
• Real-time statistics calculation
• Property type distribution
• Monthly activity tracking
• Visual data representation"#;

const IMPLEMENTATION_SNAPSHOT: &str = r#"3.1 Home Page Implementation
The home page serves as the entry point to the application, displaying:
• Featured properties prominently with high-quality images
• Property statistics including total properties, users, and featured listings
• City-wise property organization with visual representations
• Responsive design that adapts to different screen sizes
• Navigation to key sections of the application

3.2 Property Search and Listing
The property search functionality includes:
• Advanced filtering options for property type, city, price range, and listing type
• Search results displayed in an organized card-based layout
• Property cards showing key information at a glance
• Pagination for handling large result sets
• Sortable results based on various criteria

3.3 Property Details Page
Comprehensive property information display featuring:
• High-resolution property images with gallery functionality
• Detailed property specifications (bedrooms, bathrooms, square feet)
• Complete location information with address and city
• Pricing and listing type information
• Booking and inquiry options
• Related properties suggestions

3.4 User Dashboard
Personalized dashboard for registered users showing:
• Account statistics and activity summary
• Booking history and status
• Inquiry management
• Profile information and editing options
• Quick access to frequently used features

3.5 Admin Dashboard
Administrative interface providing:
• System-wide statistics and analytics
• Property management tools
• User management capabilities
• Booking and inquiry oversight
• Recent activity monitoring
• Property type distribution charts

3.6 Booking System
Property viewing booking interface including:
• Date and time selection for appointments
• Booking request submission
• Status tracking and updates
• Admin approval workflow
• User notification system

3.7 Inquiry Management
Communication system featuring:
• Inquiry submission form
• Inquiry status tracking
• Admin response interface
• Inquiry history viewing
• Email notification capability

[Note: Insert actual screenshots of each section here showing the implemented features]"#;

const CONCLUSION: &str = r#"The Real Estate Management System successfully addresses the challenges faced in traditional real estate operations by providing a centralized, digital platform for property management. The system demonstrates effective use of modern web technologies including ASP.NET Core MVC, Entity Framework Core, and SQL Server to create a robust and scalable solution.

Key achievements of the project include:

• Successful implementation of role-based access control with separate interfaces for administrators and users, ensuring proper security and user experience customization.

• Efficient property search and filtering mechanisms that enable users to quickly find properties matching their criteria through multiple filter options and dynamic query building.

• Seamless booking and inquiry management systems that streamline communication between property owners and potential buyers/renters, with proper workflow management and status tracking.

• Responsive and user-friendly interface design using Bootstrap framework, ensuring the application works seamlessly across desktop, tablet, and mobile devices.

• Secure authentication and data management through password hashing, session management, and input validation, protecting user data and preventing security vulnerabilities.

The system provides significant value to property owners, potential buyers/renters, and administrators by streamlining operations and improving communication. The implementation follows industry best practices for security, code organization, and user experience, making it a production-ready application.

The project demonstrates proficiency in:
• Full-stack web development using ASP.NET Core
• Database design and management with Entity Framework Core
• User interface design and responsive layout development
• Security implementation and best practices
• Software engineering principles and design patterns

Future enhancements could include:
• Integration with payment gateways for online transactions and deposits
• Email notification system for bookings, inquiries, and property updates
• Mobile application development for iOS and Android platforms
• Advanced analytics and reporting features with data visualization
• Integration with map services (Google Maps) for location visualization
• Multi-language support for international users
• Property comparison features allowing users to compare multiple properties
• Saved searches and favorites functionality for enhanced user experience
• Real-time chat support for instant communication
• Property recommendation system based on user preferences
• Document management for property documents and contracts"#;

const REFERENCES: &str = r#"1. Microsoft Docs. (2024). ASP.NET Core MVC. Retrieved from https://docs.microsoft.com/en-us/aspnet/core/mvc/

2. Microsoft Docs. (2024). Entity Framework Core. Retrieved from https://docs.microsoft.com/en-us/ef/core/

3. Bootstrap Documentation. (2024). Bootstrap 5. Retrieved from https://getbootstrap.com/docs/5.0/

4. jQuery Documentation. (2024). jQuery API Documentation. Retrieved from https://api.jquery.com/

5. C# Documentation. (2024). Microsoft C# Guide. Retrieved from https://docs.microsoft.com/en-us/dotnet/csharp/

6. SQL Server Documentation. (2024). Microsoft SQL Server. Retrieved from https://docs.microsoft.com/en-us/sql/

7. BCrypt.Net Documentation. (2024). BCrypt.Net-Next NuGet Package. Retrieved from https://www.nuget.org/packages/BCrypt.Net-Next/

8. Visual Studio Documentation. (2024). Visual Studio IDE. Retrieved from https://docs.microsoft.com/en-us/visualstudio/

9. Microsoft Learn. (2024). Learn ASP.NET Core. Retrieved from https://learn.microsoft.com/en-us/aspnet/core/

10. Entity Framework Core Tutorial. (2024). EF Core Getting Started. Retrieved from https://learn.microsoft.com/en-us/ef/core/get-started/overview/first-app"#;
