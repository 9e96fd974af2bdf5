//! Settings constants
//!
//! Recognized environment variables and their fallback values.

// =============================================================================
// Environment variables
// =============================================================================

/// Host of the external video-processing (nuclio) service
pub const ENV_NUCLIO_HOST: &str = "CVAT_NUCLIO_HOST";

/// Host shared by every job queue and the query cache
pub const ENV_REDIS_HOST: &str = "CVAT_REDIS_HOST";

/// Profile selector read by the CLI
pub const ENV_PROFILE: &str = "CVAT_SETTINGS_PROFILE";

// =============================================================================
// Production defaults
// =============================================================================

pub const DEFAULT_NUCLIO_HOST: &str = "nuclio";

pub const DEFAULT_REDIS_HOST: &str = "cvat_redis";

// =============================================================================
// Installed apps
// =============================================================================

/// WSGI server app appended in production
pub const APP_WSGI_SERVER: &str = "mod_wsgi.server";

/// Installed apps shared by every profile, in load order
pub const BASE_INSTALLED_APPS: &[&str] = &[
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "cvat.apps.engine",
    "cvat.apps.dataset_manager",
    "cvat.apps.authentication",
    "cvat.apps.documentation",
    "cvat.apps.lambda_manager",
    "django_rq",
    "compressor",
    "cacheops",
    "sendfile",
    "dj_pagination",
    "revproxy",
    "rules",
    "rest_framework",
    "rest_framework.authtoken",
    "django_filters",
    "drf_yasg",
    "rest_auth",
    "django.contrib.sites",
    "allauth",
    "allauth.account",
    "corsheaders",
    "allauth.socialaccount",
    "rest_auth.registration",
];

// =============================================================================
// Job queues
// =============================================================================

pub const QUEUE_DEFAULT: &str = "default";

pub const QUEUE_LOW: &str = "low";

/// Base queues with their job timeouts
pub const BASE_QUEUES: &[(&str, &str)] = &[(QUEUE_DEFAULT, "4h"), (QUEUE_LOW, "24h")];
